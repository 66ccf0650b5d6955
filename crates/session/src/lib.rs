//! One in-memory conversion session: collect inputs, convert them
//! sequentially, analyze on demand, bundle the results. Nothing here
//! persists beyond the process.

pub mod batch;
pub mod bundle;
pub mod input;

pub use batch::{analyze_file, convert_batch, output_name, ConvertedFile};
pub use bundle::write_bundle;
pub use input::{collect_tree, source_from_path};
