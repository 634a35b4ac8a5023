//! Debugging aids for view trees: a text dump and tree statistics.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use swaddle_core::{Alignment, Matrix4, View, ViewKind};

/// Renders `root` depth-first, one node per line, two spaces per level.
///
/// Ids are left out so dumps of equal trees compare equal.
pub fn describe_tree(root: &View) -> String {
    let mut out = String::new();
    for (view, depth) in preorder(root) {
        let _ = writeln!(out, "{:indent$}{}", "", describe_kind(&view.kind), indent = depth * 2);
    }
    out.truncate(out.trim_end().len());
    out
}

/// Depth-first, parents before children, with each node's depth below `root`.
fn preorder(root: &View) -> impl Iterator<Item = (&View, usize)> {
    let mut stack = vec![(root, 0)];
    std::iter::from_fn(move || {
        let (view, depth) = stack.pop()?;
        stack.extend(view.children.iter().rev().map(|c| (c, depth + 1)));
        Some((view, depth))
    })
}

fn opt(v: Option<f32>) -> String {
    v.map_or_else(|| "auto".to_string(), |v| v.to_string())
}

fn align(a: Alignment) -> String {
    format!("({}, {})", a.x, a.y)
}

fn affine(m: &Matrix4) -> String {
    let m = &m.0;
    format!("[{}, {}, {}, {}, {}, {}]", m[0], m[1], m[4], m[5], m[12], m[13])
}

/// The kind name followed by its salient fields.
pub fn describe_kind(kind: &ViewKind) -> String {
    let name = kind.name();
    match kind {
        ViewKind::Text { text, .. } => format!("{name} {text:?}"),
        ViewKind::Box
        | ViewKind::Row
        | ViewKind::Column
        | ViewKind::Stack
        | ViewKind::IntrinsicHeight => name.to_string(),
        ViewKind::Padding { insets } => format!(
            "{name} ltrb=({}, {}, {}, {})",
            insets.left, insets.top, insets.right, insets.bottom
        ),
        ViewKind::Center {
            width_factor,
            height_factor,
        } => format!(
            "{name} width_factor={} height_factor={}",
            opt(*width_factor),
            opt(*height_factor)
        ),
        ViewKind::Align { alignment } => format!("{name} alignment={}", align(*alignment)),
        ViewKind::AspectRatio { ratio } => format!("{name} ratio={ratio}"),
        ViewKind::Baseline {
            baseline,
            baseline_type,
        } => format!("{name} baseline={baseline} type={baseline_type:?}"),
        ViewKind::ConstrainedBox { constraints: c } => format!(
            "{name} w={}..{} h={}..{}",
            c.min_width, c.max_width, c.min_height, c.max_height
        ),
        ViewKind::Expanded { flex } => format!("{name} flex={flex}"),
        ViewKind::FittedBox { fit, alignment } => {
            format!("{name} fit={fit:?} alignment={}", align(*alignment))
        }
        ViewKind::FractionallySizedBox {
            alignment,
            width_factor,
            height_factor,
        } => format!(
            "{name} alignment={} width_factor={} height_factor={}",
            align(*alignment),
            opt(*width_factor),
            opt(*height_factor)
        ),
        ViewKind::IntrinsicWidth {
            step_width,
            step_height,
        } => format!(
            "{name} step_width={} step_height={}",
            opt(*step_width),
            opt(*step_height)
        ),
        ViewKind::LimitedBox {
            max_width,
            max_height,
        } => format!("{name} max=({max_width}, {max_height})"),
        ViewKind::Offstage { offstage } => format!("{name} offstage={offstage}"),
        ViewKind::OverflowBox {
            alignment,
            min_width,
            max_width,
            min_height,
            max_height,
        } => format!(
            "{name} alignment={} w={}..{} h={}..{}",
            align(*alignment),
            opt(*min_width),
            opt(*max_width),
            opt(*min_height),
            opt(*max_height)
        ),
        ViewKind::SizedBox {
            alignment,
            width,
            height,
        } => format!(
            "{name} alignment={} size=({}, {})",
            align(*alignment),
            opt(*width),
            opt(*height)
        ),
        ViewKind::SizedOverflowBox { size, alignment } => format!(
            "{name} size=({}, {}) alignment={}",
            size.width,
            size.height,
            align(*alignment)
        ),
        ViewKind::Transform {
            transform,
            origin,
            alignment,
            transform_hit_tests,
        } => {
            let mut s = format!("{name} affine={}", affine(transform));
            if let Some(o) = origin {
                let _ = write!(s, " origin=({}, {})", o.x, o.y);
            }
            if let Some(a) = alignment {
                let _ = write!(s, " alignment={}", align(*a));
            }
            let _ = write!(s, " hit_test={transform_hit_tests}");
            s
        }
        ViewKind::ClipOval {
            clipper,
            clip_behavior,
        }
        | ViewKind::ClipRect {
            clipper,
            clip_behavior,
        } => format!(
            "{name} clip={clip_behavior:?}{}",
            if clipper.is_some() { " custom" } else { "" }
        ),
        ViewKind::ClipPath {
            clipper,
            clip_behavior,
        } => format!(
            "{name} clip={clip_behavior:?}{}",
            if clipper.is_some() { " custom" } else { "" }
        ),
        ViewKind::Opacity { opacity } => format!("{name} opacity={opacity}"),
        ViewKind::Theme { data, is_top_level } => {
            format!("{name} brightness={:?} top_level={is_top_level}", data.brightness)
        }
    }
}

/// Kind names from `root` downwards, following single-child wrappers.
pub fn wrapper_chain(root: &View) -> Vec<&'static str> {
    let mut chain = vec![root.kind.name()];
    let mut node = root;
    while let Some(child) = node.child() {
        chain.push(child.kind.name());
        node = child;
    }
    chain
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    /// Levels below the root; a lone node has depth 0.
    pub depth: usize,
    pub wrappers: usize,
    pub kinds: BTreeMap<&'static str, usize>,
}

impl TreeStats {
    pub fn collect(root: &View) -> Self {
        let mut stats = TreeStats::default();
        for (view, depth) in preorder(root) {
            stats.nodes += 1;
            stats.depth = stats.depth.max(depth);
            if view.kind.is_wrapper() {
                stats.wrappers += 1;
            }
            *stats.kinds.entry(view.kind.name()).or_default() += 1;
        }
        stats
    }
}

pub struct Inspector {
    pub enabled: bool,
    frame_count: u64,
    pub last: Option<TreeStats>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            enabled: false,
            frame_count: 0,
            last: None,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Records statistics for `root` while enabled.
    pub fn frame(&mut self, root: &View) {
        self.frame_count += 1;
        if !self.enabled {
            return;
        }
        let stats = TreeStats::collect(root);
        log::debug!(
            "frame {}: {} nodes, {} wrappers, depth {}",
            self.frame_count,
            stats.nodes,
            stats.wrappers,
            stats.depth
        );
        log::trace!("tree:\n{}", describe_tree(root));
        self.last = Some(stats);
    }
}
