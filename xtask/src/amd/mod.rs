pub(crate) mod inagua;
