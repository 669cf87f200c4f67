//! Keyframe animations handed to the render target.
//!
//! Components only describe an animation: a named keyframe set, a duration,
//! an easing curve and an iteration count. Registering the keyframes and
//! driving them is the render target's job.

use std::{
    fmt,
    sync::{Arc, LazyLock},
    time::Duration,
};

use mosaic_theme::{StyleMap, format_duration, style};
use serde::{Serialize, Serializer};

/// One step of a keyframe set, at `offset` percent of the cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    pub offset: f32,
    pub style: StyleMap,
}

/// A named, ordered set of keyframes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframes {
    pub name: String,
    pub frames: Vec<Keyframe>,
}

impl Keyframes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    /// Adds a frame, keeping frames sorted by offset.
    pub fn frame(mut self, offset: f32, style: StyleMap) -> Self {
        let index = self.frames.partition_point(|frame| frame.offset <= offset);
        self.frames.insert(index, Keyframe { offset, style });
        self
    }

    /// The `@keyframes` rule for CSS-like targets.
    pub fn css(&self) -> String {
        let mut out = format!("@keyframes {} {{", self.name);
        for frame in &self.frames {
            out.push_str(&format!(" {}% {{", frame.offset));
            for (property, value) in &frame.style {
                out.push_str(&format!(" {property}: {value};"));
            }
            out.push_str(" }");
        }
        out.push_str(" }");
        out
    }
}

static SPIN: LazyLock<Arc<Keyframes>> = LazyLock::new(|| {
    Arc::new(
        Keyframes::new("spin")
            .frame(0., style! { "transform" => "rotate(0deg)" })
            .frame(100., style! { "transform" => "rotate(360deg)" }),
    )
});

/// A full clockwise turn.
pub fn spin() -> Arc<Keyframes> {
    SPIN.clone()
}

/// Timing curve of an animation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutQuint,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".into(),
            Easing::EaseIn => "ease-in".into(),
            Easing::EaseOut => "ease-out".into(),
            Easing::EaseInOut => "ease-in-out".into(),
            Easing::EaseOutQuint => "cubic-bezier(0.22, 1, 0.36, 1)".into(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iterations {
    Count(u32),
    Infinite,
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iterations::Count(count) => write!(f, "{count}"),
            Iterations::Infinite => f.write_str("infinite"),
        }
    }
}

/// A keyframe animation attached to a render node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub keyframes: Arc<Keyframes>,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
    #[serde(serialize_with = "serialize_display_css")]
    pub easing: Easing,
    #[serde(serialize_with = "serialize_display")]
    pub iterations: Iterations,
}

impl Animation {
    /// Plays `keyframes` once, linearly.
    pub fn new(keyframes: Arc<Keyframes>, duration: Duration) -> Self {
        Self {
            keyframes,
            duration,
            easing: Easing::Linear,
            iterations: Iterations::Count(1),
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn name(&self) -> &str {
        &self.keyframes.name
    }

    /// The CSS `animation` shorthand, e.g. `spin 0.45s linear infinite`.
    pub fn shorthand(&self) -> String {
        format!(
            "{} {} {} {}",
            self.keyframes.name,
            format_duration(self.duration),
            self.easing.css(),
            self.iterations
        )
    }
}

fn serialize_duration<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}

fn serialize_display_css<S: Serializer>(easing: &Easing, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&easing.css())
}

fn serialize_display<S: Serializer, T: fmt::Display>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
