pub mod category;
pub mod predictions;
pub mod radar;
pub mod ranking;
pub mod scatter;
pub mod template;
pub mod types;
pub mod utils;

pub use category::*;
pub use predictions::*;
pub use radar::*;
pub use ranking::*;
pub use scatter::*;
pub use template::*;
pub use types::*;
pub use utils::*;
