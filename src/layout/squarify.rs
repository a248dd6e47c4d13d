use std::cmp::Ordering;

use compact_str::CompactString;

/// Extents at or below this are treated as degenerate and stop subdivision.
const MIN_EXTENT: f64 = 1e-6;

/// An axis-aligned rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    fn is_degenerate(&self) -> bool {
        self.w <= MIN_EXTENT || self.h <= MIN_EXTENT
    }
}

/// A weighted layout item. Leaf items are stocks; items with children are
/// sector groups whose weight is the (possibly capped) sum of their children.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: CompactString,
    pub weight: f64,
    pub children: Vec<Item>,
}

impl Item {
    pub fn leaf(id: impl Into<CompactString>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            children: Vec::new(),
        }
    }

    /// A group whose weight is the sum of its children's positive weights.
    pub fn group(id: impl Into<CompactString>, children: Vec<Item>) -> Self {
        let weight = children
            .iter()
            .filter(|c| c.weight.is_finite() && c.weight > 0.0)
            .map(|c| c.weight)
            .sum();
        Self {
            id: id.into(),
            weight,
            children,
        }
    }
}

/// A placed item. The engine keeps no reference to these after returning.
#[derive(Debug, Clone)]
pub struct PlacedItem {
    pub id: CompactString,
    pub weight: f64,
    pub rect: Rect,
    pub children: Vec<PlacedItem>,
}

/// Configuration for treemap layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Height reserved at the top of each group rect for its title strip.
    /// The renderer overwrites this with the measured title height once it
    /// has one; 28px is the pre-measurement fallback.
    pub header_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            header_height: 28.0,
        }
    }
}

/// Lay out `items` inside `rect` with default parameters.
pub fn layout(items: &[Item], rect: Rect) -> Vec<PlacedItem> {
    layout_with(items, rect, &LayoutParams::default())
}

/// Lay out `items` inside `rect`.
///
/// Each output rect's area is proportional to its item's share of the total
/// weight, the output tiles `rect` exactly (up to floating-point rounding),
/// and placements come back in the order the algorithm placed them
/// (descending weight). Items with non-finite or non-positive weight are
/// excluded; empty or degenerate input yields an empty result.
pub fn layout_with(items: &[Item], rect: Rect, params: &LayoutParams) -> Vec<PlacedItem> {
    if rect.is_degenerate() {
        return Vec::new();
    }

    let mut order: Vec<&Item> = items
        .iter()
        .filter(|it| it.weight.is_finite() && it.weight > 0.0)
        .collect();
    if order.len() < items.len() {
        tracing::debug!(
            "Excluded {} item(s) with non-positive or non-finite weight",
            items.len() - order.len()
        );
    }
    if order.is_empty() {
        return Vec::new();
    }

    // Stable descending sort keeps equal weights in input order, so repeated
    // layouts of the same input are identical.
    order.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));

    let total: f64 = order.iter().map(|it| it.weight).sum();
    let scale = rect.area() / total;

    let mut rows = Vec::with_capacity(order.len());
    squarify(&order, scale, rect, &mut rows);

    rows.into_iter()
        .map(|(item, r)| place(item, r, params))
        .collect()
}

/// Assign `rect` to `item`; for groups, reserve the header strip and lay out
/// the children in the remaining body.
fn place(item: &Item, rect: Rect, params: &LayoutParams) -> PlacedItem {
    let children = if item.children.is_empty() {
        Vec::new()
    } else {
        layout_with(&item.children, body_rect(rect, params.header_height), params)
    };
    PlacedItem {
        id: item.id.clone(),
        weight: item.weight,
        rect,
        children,
    }
}

/// The part of a group rect left after its header strip.
fn body_rect(rect: Rect, header_height: f64) -> Rect {
    let strip = header_height.clamp(0.0, rect.h);
    Rect::new(rect.x, rect.y + strip, rect.w, rect.h - strip)
}

/// Canonical squarified layout: grow each row greedily while the worst
/// aspect ratio keeps improving, lay it along the shorter side, shrink the
/// rect, repeat. `items` must be sorted descending; every weight positive.
fn squarify<'a>(items: &[&'a Item], scale: f64, rect: Rect, out: &mut Vec<(&'a Item, Rect)>) {
    let Rect {
        mut x,
        mut y,
        mut w,
        mut h,
    } = rect;
    let mut rest = items;
    let area = |it: &Item| it.weight * scale;

    while !rest.is_empty() {
        if w <= MIN_EXTENT || h <= MIN_EXTENT {
            break;
        }

        // The row is laid along the shorter side, so that side fixes the
        // aspect-ratio score for every candidate prefix.
        let column = w >= h;
        let short = if column { h } else { w };

        // Descending order makes the first area the row maximum and the
        // last-added area the row minimum.
        let max_a = area(rest[0]);
        let mut row_sum = max_a;
        let mut worst = worst_ratio(max_a, max_a, row_sum, short);
        let mut k = 1;
        while k < rest.len() {
            let next = area(rest[k]);
            let cand = worst_ratio(max_a, next, row_sum + next, short);
            if cand > worst {
                break;
            }
            worst = cand;
            row_sum += next;
            k += 1;
        }

        let thickness = row_sum / short;
        let mut offset = 0.0;
        for &it in &rest[..k] {
            let length = area(it) / thickness;
            if !length.is_finite() || !thickness.is_finite() {
                tracing::warn!(
                    "Skipping item '{}': non-finite row geometry (length={}, thickness={})",
                    it.id,
                    length,
                    thickness
                );
                continue;
            }
            let r = if column {
                Rect::new(x, y + offset, thickness, length)
            } else {
                Rect::new(x + offset, y, length, thickness)
            };
            out.push((it, r));
            offset += length;
        }

        if column {
            x += thickness;
            w = (w - thickness).max(0.0);
        } else {
            y += thickness;
            h = (h - thickness).max(0.0);
        }
        rest = &rest[k..];
    }
}

/// Worst aspect ratio of a candidate row with extreme member areas `max_a`
/// and `min_a`, total area `sum`, laid along a side of length `side`.
fn worst_ratio(max_a: f64, min_a: f64, sum: f64, side: f64) -> f64 {
    if sum <= 0.0 || min_a <= 0.0 || side <= MIN_EXTENT {
        return f64::MAX;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    ((side_sq * max_a) / sum_sq).max(sum_sq / (side_sq * min_a))
}
