//! Section renderers for the VendorConnect storefront.

mod alerts;
mod bulk;
mod cart_panel;
mod header;
mod payment;
mod pooling;
mod product_grid;
mod success;
mod visual_grid;
mod voice;

pub use alerts::*;
pub use bulk::*;
pub use cart_panel::*;
pub use header::*;
pub use payment::*;
pub use pooling::*;
pub use product_grid::*;
pub use success::*;
pub use visual_grid::*;
pub use voice::*;
