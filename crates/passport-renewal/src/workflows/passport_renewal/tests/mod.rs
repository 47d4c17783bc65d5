mod common;
mod intake;
mod plan;
