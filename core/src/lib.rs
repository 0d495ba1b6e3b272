pub mod pages;
pub mod scaffold;
pub mod template;

pub use scaffold::WikiScaffolder;
