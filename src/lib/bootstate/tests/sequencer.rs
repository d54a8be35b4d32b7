use bootstate::*;
use core::convert::Infallible;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Event {
    Post(u8),
    Step(&'static str),
    Handoff,
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn posts(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Post(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    fn steps(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Step(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl Platform for Recorder {
    fn post_code(&mut self, code: PostCode) {
        self.events.push(Event::Post(code.value()));
    }

    fn enter_next_stage(&mut self) -> Result<Infallible, Error> {
        self.events.push(Event::Handoff);
        Err(Error::NextStageReturned)
    }
}

const HANDOFF: PostCode = PostCode::new(0x50);
const TERMINAL: PostCode = PostCode::new(0x54);

fn check_bist(p: &mut Recorder, state: &SequencerState) -> Result<(), Error> {
    p.events.push(Event::Step("bist"));
    match state.bist() {
        0 => Ok(()),
        bist => Err(Error::SelfTestFailure { bist }),
    }
}

fn table() -> [Step<Recorder>; 8] {
    [
        Step::always("mmio", None, |p, _| {
            p.events.push(Event::Step("mmio"));
            Ok(())
        }),
        Step::cold_boot_cpu("poweron", Some(PostCode::new(0x30)), |p, _| {
            p.events.push(Event::Step("poweron"));
            Ok(())
        }),
        Step::cold_boot_cpu("superio", Some(PostCode::new(0x31)), |p, _| {
            p.events.push(Event::Step("superio"));
            Ok(())
        }),
        Step::always("bist", Some(PostCode::new(0x34)), check_bist),
        Step::always("reset", Some(PostCode::new(0x37)), |p, _| {
            p.events.push(Event::Step("reset"));
            Ok(())
        }),
        Step::always("early", Some(PostCode::new(0x39)), |p, _| {
            p.events.push(Event::Step("early"));
            Ok(())
        }),
        Step::always("post", Some(PostCode::new(0x40)), |p, _| {
            p.events.push(Event::Step("post"));
            Ok(())
        }),
        Step::always("env", Some(PostCode::new(0x41)), |p, _| {
            p.events.push(Event::Step("env"));
            Ok(())
        }),
    ]
}

fn run(role: Role, reset_path: ResetPath, bist: u32) -> (Recorder, Error) {
    let steps = table();
    let stage = Stage::new("romstage", &steps, HANDOFF, TERMINAL).unwrap();
    let mut recorder = Recorder::default();
    let err = Sequencer::new(&stage, role, reset_path, bist).run(&mut recorder);
    (recorder, err)
}

#[test]
fn cold_boot_cpu_runs_gated_block_once_after_mmio() {
    let (rec, _) = run(Role::Primary, ResetPath::Cold, 0);
    assert_eq!(
        rec.steps(),
        ["mmio", "poweron", "superio", "bist", "reset", "early", "post", "env"]
    );
    assert_eq!(rec.steps().iter().filter(|s| **s == "poweron").count(), 1);
}

#[test]
fn gated_block_skipped_on_warm_path_or_secondary() {
    for (role, path) in [
        (Role::Primary, ResetPath::Warm),
        (Role::Secondary, ResetPath::Cold),
        (Role::Secondary, ResetPath::Warm),
    ] {
        let (rec, _) = run(role, path, 0);
        assert_eq!(
            rec.steps(),
            ["mmio", "bist", "reset", "early", "post", "env"],
            "{role:?} {path:?}"
        );
        assert!(!rec.posts().contains(&0x30));
        assert!(!rec.posts().contains(&0x31));
    }
}

#[test]
fn checkpoints_strictly_increase() {
    let (rec, _) = run(Role::Primary, ResetPath::Cold, 0);
    let posts = rec.posts();
    assert_eq!(posts, [0x30, 0x31, 0x34, 0x37, 0x39, 0x40, 0x41, 0x50, 0x54]);
    assert!(posts.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn bist_failure_stops_the_stage() {
    let (rec, err) = run(Role::Primary, ResetPath::Cold, 0xdead);
    assert_eq!(err, Error::SelfTestFailure { bist: 0xdead });
    assert_eq!(rec.steps().last(), Some(&"bist"));
    assert_eq!(rec.posts().last(), Some(&0x34));
    assert!(!rec.events.contains(&Event::Handoff));
}

#[test]
fn vendor_phases_run_in_order_once() {
    let (rec, _) = run(Role::Secondary, ResetPath::Warm, 0);
    let phases: Vec<_> = rec
        .steps()
        .into_iter()
        .filter(|s| ["reset", "early", "post", "env"].contains(s))
        .collect();
    assert_eq!(phases, ["reset", "early", "post", "env"]);
}

#[test]
fn returning_next_stage_emits_terminal_code_last() {
    let (rec, err) = run(Role::Primary, ResetPath::Cold, 0);
    assert_eq!(err, Error::NextStageReturned);
    let tail = &rec.events[rec.events.len() - 3..];
    assert_eq!(tail, [Event::Post(0x50), Event::Handoff, Event::Post(0x54)]);
}

#[test]
fn stage_rejects_unordered_checkpoints() {
    let steps: [Step<Recorder>; 2] = [
        Step::always("a", Some(PostCode::new(0x31)), |_, _| Ok(())),
        Step::always("b", Some(PostCode::new(0x30)), |_, _| Ok(())),
    ];
    let err = Stage::new("bad", &steps, HANDOFF, TERMINAL).err();
    assert_eq!(
        err,
        Some(Error::CheckpointOrder {
            previous: PostCode::new(0x31),
            next: PostCode::new(0x30),
        })
    );

    let steps: [Step<Recorder>; 1] =
        [Step::always("late", Some(PostCode::new(0x60)), |_, _| Ok(()))];
    assert!(Stage::new("bad", &steps, HANDOFF, TERMINAL).is_err());
}

#[test]
fn step_sees_current_checkpoint() {
    let steps: [Step<Recorder>; 2] = [
        Step::always("first", Some(PostCode::new(0x10)), |p, s| {
            assert_eq!(s.current_checkpoint(), Some(PostCode::new(0x10)));
            p.events.push(Event::Step("first"));
            Ok(())
        }),
        Step::always("uncoded", None, |p, s| {
            assert_eq!(s.current_checkpoint(), Some(PostCode::new(0x10)));
            p.events.push(Event::Step("uncoded"));
            Ok(())
        }),
    ];
    let stage = Stage::new("coded", &steps, HANDOFF, TERMINAL).unwrap();
    let mut rec = Recorder::default();
    Sequencer::new(&stage, Role::Primary, ResetPath::Cold, 0).run(&mut rec);
    assert_eq!(rec.steps(), ["first", "uncoded"]);
}
