mod summarize;


pub use summarize::*;
