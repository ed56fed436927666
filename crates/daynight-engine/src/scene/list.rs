use super::Disc;

/// Z-layer for draw items. Higher values appear on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// A recorded disc plus its ordering key.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    /// Insertion index; keeps ordering stable within a layer.
    pub order: u32,
    pub disc: Disc,
}

/// Draw stream for one frame.
///
/// `push` is O(1); paint-order iteration sorts an index buffer that is kept
/// across frames, so a warmed-up list does not allocate.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    sorted: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted.clear();
        self.sorted_dirty = false;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Records `disc` on layer `z`. Invisible discs are dropped here.
    pub fn push(&mut self, z: ZIndex, disc: Disc) {
        if !disc.is_visible() {
            return;
        }
        let order = self.items.len() as u32;
        self.items.push(DrawItem { z, order, disc });
        self.sorted_dirty = true;
    }

    /// Iterates discs back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted.clear();
            self.sorted.extend(0..self.items.len());
            let items = &self.items;
            self.sorted.sort_by_key(|&i| (items[i].z, items[i].order));
            self.sorted_dirty = false;
        }

        self.sorted.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn disc(radius: f32) -> Disc {
        Disc::new(Vec2::new(10.0, 10.0), radius, Color::white())
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex(2), disc(1.0));
        list.push(ZIndex(0), disc(2.0));
        list.push(ZIndex(2), disc(3.0));
        list.push(ZIndex(1), disc(4.0));

        let radii: Vec<f32> = list.iter_in_paint_order().map(|it| it.disc.radius).collect();
        assert_eq!(radii, vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn invisible_discs_are_not_recorded() {
        let mut list = DrawList::new();
        list.push(ZIndex(0), disc(0.0));
        list.push_disc(ZIndex(0), Vec2::zero(), 5.0, Color::transparent());
        assert!(list.is_empty());
    }

    #[test]
    fn clear_resets_between_frames() {
        let mut list = DrawList::new();
        list.push(ZIndex(0), disc(1.0));
        assert_eq!(list.iter_in_paint_order().count(), 1);

        list.clear();
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push(ZIndex(0), disc(2.0));
        assert_eq!(list.iter_in_paint_order().count(), 1);
    }
}
