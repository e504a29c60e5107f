//! Interactive driver glue: rendering, human input and the
//! strategy-alternating game loop. Nothing here participates in search.

pub mod display;
pub mod human;
pub mod r#loop; // `loop` is a reserved keyword, escape with `r#`
