//! Farcaster frame metadata renderer.
//! This crate turns a `FrameDescription` into the ordered `fc:frame:*` meta tags a
//! feed renderer reads from a document head, optionally wrapped in a caller container.

pub mod config;
pub mod context;
pub mod errors;
pub mod frame;
pub mod html;
pub mod renderer;
pub mod tag;

pub use config::RenderConfig;
pub use context::Wrapper;
pub use errors::FrameMetadataError;
pub use frame::{ButtonAction, FrameButton, FrameDescription, FrameInput, MAX_BUTTONS};
pub use html::to_html;
pub use renderer::{FrameRenderer, MetaTagRenderer, frame_meta_tags, render_frame_metadata};
pub use tag::{MetaTag, RenderNode};
