//! Rendering-engine contract
//!
//! The particle system never draws anything itself. Hosts adapt their engine's
//! sprite and display-container types to the traits below, and the system
//! drives them through shared handles. A sprite lives in two places at once
//! (its batch and its container), so both hold the same `SpriteHandle` and
//! identity is pointer identity.

pub mod headless;

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

pub use headless::{HeadlessContainer, HeadlessEngine, HeadlessSprite};

/// Shared handle to a renderer-owned sprite
pub type SpriteHandle<S> = Rc<RefCell<S>>;

/// Shared handle to a renderer-owned display container
pub type ContainerHandle<C> = Rc<RefCell<C>>;

/// Wrap a sprite in a shared handle
pub fn sprite_handle<S>(sprite: S) -> SpriteHandle<S> {
    Rc::new(RefCell::new(sprite))
}

/// Wrap a container in a shared handle
pub fn container_handle<C>(container: C) -> ContainerHandle<C> {
    Rc::new(RefCell::new(container))
}

/// Visual object the particle system animates
pub trait Sprite {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    /// Set display width and height in pixels
    fn set_size(&mut self, width: f32, height: f32);

    /// Set the anchor (pivot) in normalized sprite coordinates
    fn set_anchor(&mut self, anchor: Vec2);

    fn scale(&self) -> Vec2;
    fn set_scale(&mut self, scale: Vec2);

    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, rotation: f32);

    fn alpha(&self) -> f32;
    fn set_alpha(&mut self, alpha: f32);

    /// Number of animation frames; zero for static sprites
    fn total_frames(&self) -> u32 {
        0
    }

    /// Show `frame` and stop any animation
    fn goto_and_stop(&mut self, _frame: u32) {}
}

/// Display container holding particle sprites
pub trait Container {
    type Sprite: Sprite;

    fn add_child(&mut self, sprite: SpriteHandle<Self::Sprite>);

    /// Remove `sprite` by identity. Removing an unknown sprite does nothing.
    fn remove_child(&mut self, sprite: &SpriteHandle<Self::Sprite>);
}

/// Capability to build fresh particle containers
pub trait ContainerFactory {
    type Container: Container;

    fn create_container(&self) -> Self::Container;
}

/// Host rendering engine
///
/// Engines that can build their own particle containers expose a
/// `ContainerFactory`; the particle system then binds to the engine and
/// builds a container whenever `create` is called without one.
pub trait RenderingEngine {
    type Sprite: Sprite;
    type Container: Container<Sprite = Self::Sprite>;

    /// Renderer identifier, e.g. `"pixi"`
    fn name(&self) -> &str;

    fn container_factory(&self) -> Option<&dyn ContainerFactory<Container = Self::Container>> {
        None
    }
}
