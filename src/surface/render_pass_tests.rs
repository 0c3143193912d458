//! Unit tests for the render-pass descriptor builder and output description

use std::sync::Arc;
use crate::surface::mock_surface::MockTexture;
use crate::surface::{
    LoadAction, OutputAttachmentDescription, OutputDescription, RenderPassDescriptor, Texture,
    TextureFormat,
};

fn color_texture() -> Arc<MockTexture> {
    Arc::new(MockTexture::new(
        256,
        256,
        TextureFormat::B8G8R8A8_UNORM,
        "color".to_string(),
    ))
}

// ============================================================================
// DESCRIPTOR SLOT TESTS
// ============================================================================

#[test]
fn test_new_descriptor_has_no_attachments() {
    let descriptor = RenderPassDescriptor::new();
    assert_eq!(descriptor.color_attachment_count(), 0);
    for index in 0..RenderPassDescriptor::MAX_COLOR_ATTACHMENTS {
        assert!(descriptor.color_attachment(index).is_none());
    }
    assert!(descriptor.depth_attachment().is_none());
}

#[test]
fn test_set_color_attachment_slot() {
    let mut descriptor = RenderPassDescriptor::new();
    let texture = color_texture();
    descriptor.set_color_attachment(0, texture.clone(), LoadAction::Load);

    assert_eq!(descriptor.color_attachment_count(), 1);
    let attachment = descriptor.color_attachment(0).unwrap();
    assert_eq!(attachment.load_action, LoadAction::Load);
    assert_eq!(attachment.texture.info().width, 256);
    // Other slots stay empty
    assert!(descriptor.color_attachment(1).is_none());
}

#[test]
fn test_set_color_attachment_arbitrary_slot() {
    let mut descriptor = RenderPassDescriptor::new();
    descriptor.set_color_attachment(3, color_texture(), LoadAction::DontCare);

    assert!(descriptor.color_attachment(0).is_none());
    assert_eq!(
        descriptor.color_attachment(3).unwrap().load_action,
        LoadAction::DontCare
    );
}

#[test]
#[should_panic(expected = "out of range")]
fn test_set_color_attachment_index_out_of_range_panics() {
    let mut descriptor = RenderPassDescriptor::new();
    descriptor.set_color_attachment(
        RenderPassDescriptor::MAX_COLOR_ATTACHMENTS,
        color_texture(),
        LoadAction::Load,
    );
}

#[test]
fn test_color_attachment_query_out_of_range_is_none() {
    let descriptor = RenderPassDescriptor::new();
    assert!(descriptor.color_attachment(usize::MAX).is_none());
}

#[test]
fn test_set_depth_attachment() {
    let mut descriptor = RenderPassDescriptor::new();
    let depth = Arc::new(MockTexture::new(
        256,
        256,
        TextureFormat::D32_FLOAT,
        "depth".to_string(),
    ));
    descriptor.set_depth_attachment(depth, LoadAction::Load);

    let attachment = descriptor.depth_attachment().unwrap();
    assert_eq!(attachment.load_action, LoadAction::Load);
    assert_eq!(attachment.texture.info().format, TextureFormat::D32_FLOAT);
}

#[test]
fn test_default_is_empty_descriptor() {
    let descriptor = RenderPassDescriptor::default();
    assert_eq!(descriptor.color_attachment_count(), 0);
    assert!(descriptor.depth_attachment().is_none());
}

// ============================================================================
// OUTPUT DESCRIPTION TESTS
// ============================================================================

#[test]
fn test_output_description_with_depth() {
    let output = OutputDescription::new(
        Some(OutputAttachmentDescription::new(TextureFormat::D32_FLOAT)),
        OutputAttachmentDescription::new(TextureFormat::B8G8R8A8_UNORM),
    );
    assert_eq!(
        output.color_attachment.format,
        TextureFormat::B8G8R8A8_UNORM
    );
    assert_eq!(
        output.depth_attachment.unwrap().format,
        TextureFormat::D32_FLOAT
    );
}

#[test]
fn test_output_description_without_depth() {
    let output = OutputDescription::new(
        None,
        OutputAttachmentDescription::new(TextureFormat::R8G8B8A8_SRGB),
    );
    assert!(output.depth_attachment.is_none());
}
