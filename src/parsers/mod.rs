pub mod feats;
pub mod lmf;
pub mod xml;
