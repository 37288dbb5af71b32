//! Composite sprites: a sprite that owns one child, forming a chain.
//!
//! Children draw first so the parent ends up on top. Trail propagation walks
//! the chain depth-first so each segment takes the position its parent held
//! one tick earlier (snake-follow).

use crate::sprite::Sprite;
use crate::surface::Surface;

/// Capabilities shared by leaf and composite sprites.
pub trait Drawable {
    /// The sprite's own body (position, velocity, art).
    fn body(&self) -> &Sprite;

    fn body_mut(&mut self) -> &mut Sprite;

    /// Draw back-to-front into `surface`.
    fn draw(&self, surface: &mut dyn Surface);

    /// Shift positions one slot down the chain. Leaves have nothing to do.
    fn propagate_trail(&mut self);
}

impl Drawable for Sprite {
    fn body(&self) -> &Sprite {
        self
    }

    fn body_mut(&mut self) -> &mut Sprite {
        self
    }

    fn draw(&self, surface: &mut dyn Surface) {
        Sprite::draw(self, surface);
    }

    fn propagate_trail(&mut self) {}
}

/// A sprite with exactly one owned child.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSprite {
    body: Sprite,
    child: SpriteNode,
}

impl CompositeSprite {
    pub fn new(body: Sprite, child: impl Into<SpriteNode>) -> Self {
        Self {
            body,
            child: child.into(),
        }
    }

    pub fn child(&self) -> &SpriteNode {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut SpriteNode {
        &mut self.child
    }

    /// Number of sprites in this chain, including self.
    pub fn chain_len(&self) -> usize {
        1 + self.child.chain_len()
    }
}

impl Drawable for CompositeSprite {
    fn body(&self) -> &Sprite {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Sprite {
        &mut self.body
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.child.draw(surface);
        self.body.draw(surface);
    }

    fn propagate_trail(&mut self) {
        // Deepest link first, otherwise every segment collapses onto the head.
        self.child.propagate_trail();
        let pos = self.body.position();
        self.child.body_mut().set_position(pos);
    }
}

/// Closed set of sprite kinds held by a world.
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteNode {
    Leaf(Sprite),
    Composite(Box<CompositeSprite>),
}

impl SpriteNode {
    pub fn is_composite(&self) -> bool {
        matches!(self, SpriteNode::Composite(_))
    }

    /// Number of sprites reachable from this node, including itself.
    pub fn chain_len(&self) -> usize {
        match self {
            SpriteNode::Leaf(_) => 1,
            SpriteNode::Composite(c) => c.chain_len(),
        }
    }

    /// Bodies from this node down to the tail, head first.
    pub fn segments(&self) -> Segments<'_> {
        Segments { next: Some(self) }
    }
}

impl Drawable for SpriteNode {
    fn body(&self) -> &Sprite {
        match self {
            SpriteNode::Leaf(s) => s,
            SpriteNode::Composite(c) => c.body(),
        }
    }

    fn body_mut(&mut self) -> &mut Sprite {
        match self {
            SpriteNode::Leaf(s) => s,
            SpriteNode::Composite(c) => c.body_mut(),
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            SpriteNode::Leaf(s) => s.draw(surface),
            SpriteNode::Composite(c) => Drawable::draw(c.as_ref(), surface),
        }
    }

    fn propagate_trail(&mut self) {
        if let SpriteNode::Composite(c) = self {
            c.propagate_trail();
        }
    }
}

impl From<Sprite> for SpriteNode {
    fn from(sprite: Sprite) -> Self {
        SpriteNode::Leaf(sprite)
    }
}

impl From<CompositeSprite> for SpriteNode {
    fn from(composite: CompositeSprite) -> Self {
        SpriteNode::Composite(Box::new(composite))
    }
}

/// Iterator over the bodies of a chain, head first.
pub struct Segments<'a> {
    next: Option<&'a SpriteNode>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a Sprite;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        match node {
            SpriteNode::Leaf(s) => Some(s),
            SpriteNode::Composite(c) => {
                self.next = Some(c.child());
                Some(c.body())
            }
        }
    }
}
