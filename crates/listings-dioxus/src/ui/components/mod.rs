pub mod block_palette;
pub mod block_settings;
pub mod builder_canvas;
pub mod description_builder;
pub mod description_view;
pub mod enquiry_form;
pub mod error_screen;
pub mod filter_bar;
pub mod property_detail;
pub mod property_list;
pub mod raw_editor;

pub use block_palette::BlockPalette;
pub use block_settings::BlockSettings;
pub use builder_canvas::BuilderCanvas;
pub use description_builder::DescriptionBuilder;
pub use description_view::{DescriptionView, RenderNodeView};
pub use enquiry_form::EnquiryForm;
pub use error_screen::ErrorScreen;
pub use filter_bar::FilterBar;
pub use property_detail::PropertyDetail;
pub use property_list::PropertyList;
pub use raw_editor::RawEditor;
