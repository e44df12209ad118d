//! Surfaces that cards are dealt onto.

use crate::{card::Card, config::DealConfig};
use anyhow::Result;
use rand::Rng;
use std::fmt::Write;
use tabletop_math::{
    Transform,
    angle::{Angle, Radians},
};

/// Something cards can be placed on with a given transform.
pub trait Surface {
    /// Places the card on the surface with the given transform.
    fn place(&mut self, card: &Card, transform: &Transform) -> Result<()>;
}

/// Computes a randomized transform for each card landing on the table.
///
/// A card is tumbled by a random rotation about each axis, flipped half a
/// turn about the y-axis so that it lands face down, and finally lifted a
/// random distance off the table.
#[derive(Clone, Debug)]
pub struct CardPlacer {
    max_rotation: Radians,
    max_lift: f64,
}

/// A surface rendering each card as an HTML element styled with a CSS 3D
/// transform.
#[derive(Clone, Debug, Default)]
pub struct HtmlTable {
    asset_dir: String,
    nodes: Vec<String>,
}

impl CardPlacer {
    pub fn new(max_rotation: impl Angle, max_lift: f64) -> Self {
        Self {
            max_rotation: max_rotation.as_radians(),
            max_lift,
        }
    }

    pub fn from_config(config: &DealConfig) -> Self {
        Self::new(config.max_rotation, config.max_lift)
    }

    /// Generates the transform for the next card.
    pub fn random_transform<R: Rng + ?Sized>(&self, rng: &mut R) -> Transform {
        let max_rotation = self.max_rotation.radians();

        let mut transform = Transform::new();
        transform.rotate(
            rng.random::<f64>() * max_rotation,
            rng.random::<f64>() * max_rotation,
            rng.random::<f64>() * max_rotation,
        );
        transform.rotate_by(Radians(0.0), Radians::HALF_TURN, Radians(0.0));
        transform.translate(0.0, 0.0, rng.random::<f64>() * self.max_lift);
        transform
    }
}

impl HtmlTable {
    /// Creates an empty table whose card images are looked up in the given
    /// directory.
    pub fn new(asset_dir: impl Into<String>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            nodes: Vec::new(),
        }
    }

    /// The number of cards placed so far.
    pub fn card_count(&self) -> usize {
        self.nodes.len()
    }

    /// The HTML element of each placed card, in placement order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Wraps the placed cards in a complete HTML page.
    pub fn into_document(self) -> String {
        let mut document = String::from(DOCUMENT_HEAD);
        for node in &self.nodes {
            document.push_str("      ");
            document.push_str(node);
            document.push('\n');
        }
        document.push_str(DOCUMENT_TAIL);
        document
    }
}

impl Surface for HtmlTable {
    fn place(&mut self, card: &Card, transform: &Transform) -> Result<()> {
        let mut node = String::new();
        write!(
            node,
            r#"<div class="card" style="{}"><img class="card-face" src="{}" alt="{}"></div>"#,
            escape_attribute(&transform.css()),
            escape_attribute(&card.face_path(&self.asset_dir)),
            escape_attribute(&card.alt_text()),
        )?;
        self.nodes.push(node);
        Ok(())
    }
}

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Tabletop</title>
    <style>
      #table { position: relative; perspective: 1000px; transform-style: preserve-3d; }
      .card { position: absolute; transform-style: preserve-3d; }
      .card-face { width: 100px; backface-visibility: visible; }
    </style>
  </head>
  <body>
    <div id="table">
"#;

const DOCUMENT_TAIL: &str = r#"    </div>
  </body>
</html>
"#;

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
