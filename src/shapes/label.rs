use crate::animation::timeline::Timeline;
use crate::foundation::math::round_to;
use crate::geometry::point::Point2;
use crate::shapes::animated::{Animated, Appearance, Tween};
use crate::shapes::style::Style;

/// Horizontal text alignment relative to the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Text anchored at `origin`. Embedded newlines render as separate lines.
#[derive(Debug)]
pub struct Label {
    origin: Point2,
    text: String,
    anchor: TextAnchor,
    /// Line advance in ems.
    line_height: f64,
    appearance: Appearance,
    timeline: Timeline<Label>,
}

fn prefix(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

fn visible_chars(fraction: f64, total: usize) -> usize {
    (fraction * total as f64).floor().max(0.0) as usize
}

impl Label {
    pub fn new(origin: Point2, text: impl Into<String>, style: Style) -> Self {
        Self {
            origin,
            text: text.into(),
            anchor: TextAnchor::Start,
            line_height: 1.2,
            appearance: Appearance::new(style),
            timeline: Timeline::new(),
        }
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    pub fn set(&mut self, origin: Point2, text: impl Into<String>) {
        self.origin = origin;
        self.text = text.into();
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn align(&mut self, anchor: TextAnchor) -> &mut Self {
        self.anchor = anchor;
        self
    }

    pub fn with_line_height(&mut self, ems: f64) -> &mut Self {
        self.line_height = ems;
        self
    }

    /// Fade the current text out, swap to `text` at the halfway point and fade back in.
    pub fn fade_text(&mut self, text: impl Into<String>, tween: Tween) -> &mut Self {
        let before = self.text.clone();
        let after = text.into();
        let ease = tween.ease;
        self.timeline
            .add_action(tween.duration, move |l: &mut Label, p| {
                let e = ease.apply(p.t);
                if e >= 0.5 {
                    l.set(l.origin, after.clone());
                    l.set_opacity(round_to(2.0 * e - 1.0, 2));
                } else {
                    l.set(l.origin, before.clone());
                    l.set_opacity(round_to(1.0 - 2.0 * e, 2));
                }
            });
        self
    }

    /// Text computed from eased progress, rounded to four decimals.
    pub fn text_function(
        &mut self,
        f: impl Fn(f64) -> String + 'static,
        tween: Tween,
    ) -> &mut Self {
        let ease = tween.ease;
        self.timeline
            .add_action(tween.duration, move |l: &mut Label, p| {
                let text = f(round_to(ease.apply(p.t), 4));
                l.set(l.origin, text);
            });
        self
    }

    /// Count from `start` to `end`, substituting the first `{}` of `template`.
    pub fn integer_count(
        &mut self,
        template: impl Into<String>,
        start: i64,
        end: i64,
        tween: Tween,
    ) -> &mut Self {
        let template = template.into();
        self.text_function(
            move |t| {
                let n = ((1.0 - t) * start as f64 + t * end as f64) as i64;
                template.replacen("{}", &n.to_string(), 1)
            },
            tween,
        )
    }

    /// Reveal `text` one character at a time.
    pub fn type_text(&mut self, text: impl Into<String>, tween: Tween) -> &mut Self {
        let text = text.into();
        let total = text.chars().count();
        self.text_function(move |e| prefix(&text, visible_chars(e, total)), tween)
    }

    /// Remove the current text one character at a time from the end.
    pub fn delete_text(&mut self, tween: Tween) -> &mut Self {
        let text = self.text.clone();
        let total = text.chars().count();
        self.text_function(move |e| prefix(&text, visible_chars(1.0 - e, total)), tween)
    }
}

impl Animated for Label {
    fn position(&self) -> Point2 {
        self.origin
    }

    fn set_position(&mut self, pos: Point2) {
        self.origin = pos;
    }

    fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    fn appearance_mut(&mut self) -> &mut Appearance {
        &mut self.appearance
    }

    fn timeline(&self) -> &Timeline<Self> {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut Timeline<Self> {
        &mut self.timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/label.rs"]
mod tests;
