//! In-memory renderer
//!
//! Records sprite state without drawing anything. Used by the demo binary,
//! the tests and the benchmarks, and by hosts that run effects off-screen.

use glam::Vec2;
use std::rc::Rc;

use crate::renderer::{Container, ContainerFactory, RenderingEngine, Sprite, SpriteHandle};

/// Sprite that only stores its display state
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSprite {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub anchor: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    pub alpha: f32,
    pub total_frames: u32,
    pub current_frame: u32,
}

impl HeadlessSprite {
    /// Single-frame sprite at full opacity and unit scale
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            width: 1.0,
            height: 1.0,
            anchor: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            alpha: 1.0,
            total_frames: 0,
            current_frame: 0,
        }
    }

    /// Animated sprite with `frames` frames
    pub fn with_frames(frames: u32) -> Self {
        Self {
            total_frames: frames,
            ..Self::new()
        }
    }
}

impl Default for HeadlessSprite {
    fn default() -> Self {
        Self::new()
    }
}

impl Sprite for HeadlessSprite {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn total_frames(&self) -> u32 {
        self.total_frames
    }

    fn goto_and_stop(&mut self, frame: u32) {
        self.current_frame = frame;
    }
}

/// Container that keeps its children in insertion order
#[derive(Debug, Default)]
pub struct HeadlessContainer {
    children: Vec<SpriteHandle<HeadlessSprite>>,
}

impl HeadlessContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[SpriteHandle<HeadlessSprite>] {
        &self.children
    }

    /// Whether this exact sprite is attached
    pub fn contains(&self, sprite: &SpriteHandle<HeadlessSprite>) -> bool {
        self.children.iter().any(|child| Rc::ptr_eq(child, sprite))
    }
}

impl Container for HeadlessContainer {
    type Sprite = HeadlessSprite;

    fn add_child(&mut self, sprite: SpriteHandle<HeadlessSprite>) {
        self.children.push(sprite);
    }

    fn remove_child(&mut self, sprite: &SpriteHandle<HeadlessSprite>) {
        if let Some(index) = self.children.iter().position(|child| Rc::ptr_eq(child, sprite)) {
            self.children.remove(index);
        }
    }
}

/// Engine handle for the headless renderer
#[derive(Debug, Clone)]
pub struct HeadlessEngine {
    name: String,
    builds_containers: bool,
}

impl HeadlessEngine {
    /// Engine that builds its own particle containers
    pub fn new() -> Self {
        Self {
            name: "headless".to_string(),
            builds_containers: true,
        }
    }

    /// Engine without a container factory; every `create` call must supply one
    pub fn unbound() -> Self {
        Self {
            name: "headless".to_string(),
            builds_containers: false,
        }
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerFactory for HeadlessEngine {
    type Container = HeadlessContainer;

    fn create_container(&self) -> HeadlessContainer {
        HeadlessContainer::new()
    }
}

impl RenderingEngine for HeadlessEngine {
    type Sprite = HeadlessSprite;
    type Container = HeadlessContainer;

    fn name(&self) -> &str {
        &self.name
    }

    fn container_factory(&self) -> Option<&dyn ContainerFactory<Container = HeadlessContainer>> {
        if self.builds_containers {
            Some(self)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::sprite_handle;

    #[test]
    fn test_remove_child_by_identity() {
        let mut container = HeadlessContainer::new();
        let a = sprite_handle(HeadlessSprite::new());
        let b = sprite_handle(HeadlessSprite::new());
        container.add_child(a.clone());
        container.add_child(b.clone());

        // Equal contents, different identity
        let stranger = sprite_handle(HeadlessSprite::new());
        container.remove_child(&stranger);
        assert_eq!(container.len(), 2);

        container.remove_child(&a);
        assert_eq!(container.len(), 1);
        assert!(!container.contains(&a));
        assert!(container.contains(&b));
    }

    #[test]
    fn test_unbound_engine_has_no_factory() {
        assert!(HeadlessEngine::new().container_factory().is_some());
        assert!(HeadlessEngine::unbound().container_factory().is_none());
    }
}
