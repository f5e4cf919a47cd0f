pub mod finder;

pub use finder::DebuggeeRecipesFinder;
