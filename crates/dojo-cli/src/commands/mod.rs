pub mod inspect;
pub mod labels;
pub mod replay;
