// Author: Dustin Pilgrim
// License: MIT

pub mod backend;
pub mod logind;
pub mod shell;
