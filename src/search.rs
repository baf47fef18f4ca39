mod matcher;

pub use matcher::PageMatcher;
