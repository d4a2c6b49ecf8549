// Application layer: the interactive front of the scaffolder.

pub mod prompt;
