pub mod docs;
pub mod history;
pub mod initialize;
pub mod network;
pub mod progress;
pub mod run;

pub use docs::*;
pub use history::*;
pub use initialize::*;
pub use network::*;
pub use progress::*;
pub use run::*;
