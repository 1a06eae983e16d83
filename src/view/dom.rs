use ratatui::layout::Rect;

use super::fragment::ItemFragment;

/// Width of the toggle affordance (`[ ]`)
const TOGGLE_W: u16 = 3;
/// Columns between the toggle and the label
const LABEL_GAP: u16 = 1;
/// Cells reserved at the right edge for the remove affordance and padding
const REMOVE_RESERVE: u16 = 3;

/// Kind of element inside the list container. Doubles as the selector a
/// delegated listener matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The row itself (whitespace between affordances)
    Row,
    Toggle,
    /// The editable text region
    Label,
    Remove,
}

/// Handle to one element: the row index plus the element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRef {
    pub row: usize,
    pub kind: ElementKind,
}

impl ElementRef {
    pub fn new(row: usize, kind: ElementKind) -> Self {
        ElementRef { row, kind }
    }
}

/// Screen rectangles of one row and its affordances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowLayout {
    pub row: Rect,
    pub toggle: Rect,
    pub label: Rect,
    pub remove: Rect,
}

/// A mounted row: the fragment it was built from plus live state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNode {
    pub fragment: ItemFragment,
    /// Current text content of the editable label. Starts as the fragment
    /// label and diverges while the user edits.
    pub text: String,
    pub layout: RowLayout,
}

impl RowNode {
    fn mount(fragment: ItemFragment) -> Self {
        RowNode {
            text: fragment.label.clone(),
            fragment,
            layout: RowLayout::default(),
        }
    }

    /// Id of the item this row was rendered from
    pub fn id(&self) -> &str {
        &self.fragment.id
    }
}

/// The container the list is rendered into. Rows are replaced wholesale on
/// every render; listeners live outside it (see `delegate`).
#[derive(Debug, Clone, Default)]
pub struct ListContainer {
    rows: Vec<RowNode>,
    focus: Option<ElementRef>,
    hover: Option<usize>,
    area: Rect,
    scroll: usize,
}

impl ListContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all rows and mount `fragments` in their place. Focus is lost
    /// with the rows it pointed into.
    pub fn replace_children(&mut self, fragments: impl IntoIterator<Item = ItemFragment>) {
        self.rows = fragments.into_iter().map(RowNode::mount).collect();
        self.focus = None;
        if self.hover.is_some_and(|row| row >= self.rows.len()) {
            self.hover = None;
        }
        self.scroll = self.scroll.min(self.rows.len().saturating_sub(1));
        let area = self.area;
        self.layout(area);
    }

    pub fn rows(&self) -> &[RowNode] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the row rendered for item `id`
    pub fn row_index(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    /// The row an element belongs to, if it still exists
    pub fn closest_row(&self, element: ElementRef) -> Option<&RowNode> {
        self.rows.get(element.row)
    }

    /// Whether `element` exists and is of kind `selector`
    pub fn matches(&self, element: ElementRef, selector: ElementKind) -> bool {
        element.kind == selector && element.row < self.rows.len()
    }

    pub fn text_content(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.text.as_str())
    }

    pub fn text_content_mut(&mut self, row: usize) -> Option<&mut String> {
        self.rows.get_mut(row).map(|r| &mut r.text)
    }

    /// Put the label of `row` back to the text it was rendered with
    pub fn reset_text(&mut self, row: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            r.text = r.fragment.label.clone();
        }
    }

    pub fn focus(&self) -> Option<ElementRef> {
        self.focus
    }

    /// Move focus to `element`; ignored if the row does not exist
    pub fn set_focus(&mut self, element: Option<ElementRef>) {
        self.focus = element.filter(|el| el.row < self.rows.len());
        if let Some(el) = self.focus {
            self.scroll_to(el.row);
        }
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn set_hover(&mut self, row: Option<usize>) {
        self.hover = row.filter(|&r| r < self.rows.len());
    }

    /// Remove affordances show only on the hovered or focused row
    pub fn remove_visible(&self, row: usize) -> bool {
        self.hover == Some(row) || self.focus.is_some_and(|el| el.row == row)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Adjust scroll so `row` is within the container area
    pub fn scroll_to(&mut self, row: usize) {
        let height = self.area.height as usize;
        if height == 0 {
            return;
        }
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
        let area = self.area;
        self.layout(area);
    }

    /// Assign screen rectangles to every row. Rows scrolled out of view get
    /// empty rectangles and can not be hit.
    pub fn layout(&mut self, area: Rect) {
        self.area = area;
        let height = area.height as usize;
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i < self.scroll || i >= self.scroll + height {
                row.layout = RowLayout::default();
                continue;
            }
            let y = area.y + (i - self.scroll) as u16;
            let toggle_x = area.x + 1;
            let label_x = toggle_x + TOGGLE_W + LABEL_GAP;
            let right = area.x + area.width;
            let label_w = right.saturating_sub(label_x + REMOVE_RESERVE);
            row.layout = RowLayout {
                row: Rect::new(area.x, y, area.width, 1),
                toggle: Rect::new(toggle_x, y, TOGGLE_W, 1),
                label: Rect::new(label_x, y, label_w, 1),
                remove: Rect::new(right.saturating_sub(2), y, 1, 1),
            };
        }
    }

    /// The innermost element under a screen position
    pub fn element_at(&self, col: u16, line: u16) -> Option<ElementRef> {
        self.rows.iter().enumerate().find_map(|(i, row)| {
            let l = &row.layout;
            if !contains(l.row, col, line) {
                return None;
            }
            let kind = if contains(l.toggle, col, line) {
                ElementKind::Toggle
            } else if contains(l.label, col, line) {
                ElementKind::Label
            } else if contains(l.remove, col, line) {
                ElementKind::Remove
            } else {
                ElementKind::Row
            };
            Some(ElementRef::new(i, kind))
        })
    }

    /// Row index under a screen position
    pub fn row_at(&self, col: u16, line: u16) -> Option<usize> {
        self.element_at(col, line).map(|el| el.row)
    }
}

fn contains(rect: Rect, col: u16, line: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && line >= rect.y && line < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::Item;
    use crate::view::fragment::render_item;

    fn fragments(names: &[&str]) -> Vec<ItemFragment> {
        names
            .iter()
            .map(|n| {
                render_item(&Item {
                    id: n.to_string(),
                    value: format!("item {}", n),
                    completed: false,
                })
            })
            .collect()
    }

    fn container(names: &[&str]) -> ListContainer {
        let mut c = ListContainer::new();
        c.layout(Rect::new(0, 2, 40, 10));
        c.replace_children(fragments(names));
        c
    }

    #[test]
    fn hit_testing_finds_affordances() {
        let c = container(&["a", "b"]);
        // row 1 is drawn on screen line 3
        assert_eq!(c.element_at(1, 3), Some(ElementRef::new(1, ElementKind::Toggle)));
        assert_eq!(c.element_at(3, 3), Some(ElementRef::new(1, ElementKind::Toggle)));
        assert_eq!(c.element_at(5, 3), Some(ElementRef::new(1, ElementKind::Label)));
        assert_eq!(c.element_at(38, 3), Some(ElementRef::new(1, ElementKind::Remove)));
        assert_eq!(c.element_at(0, 3), Some(ElementRef::new(1, ElementKind::Row)));
        assert_eq!(c.element_at(5, 4), None);
        assert_eq!(c.element_at(5, 0), None);
    }

    #[test]
    fn replace_children_rebuilds_rows_and_drops_focus() {
        let mut c = container(&["a", "b"]);
        c.set_focus(Some(ElementRef::new(1, ElementKind::Label)));
        c.text_content_mut(1).unwrap().push_str(" edited");
        c.replace_children(fragments(&["b", "c", "d"]));
        assert_eq!(c.len(), 3);
        assert_eq!(c.focus(), None);
        assert_eq!(c.text_content(0), Some("item b"));
        assert_eq!(c.row_index("d"), Some(2));
        // new rows are laid out and hittable
        assert_eq!(c.element_at(5, 4), Some(ElementRef::new(2, ElementKind::Label)));
    }

    #[test]
    fn closest_row_of_missing_row_is_none() {
        let c = container(&["a"]);
        assert!(c.closest_row(ElementRef::new(5, ElementKind::Remove)).is_none());
        assert!(!c.matches(ElementRef::new(5, ElementKind::Remove), ElementKind::Remove));
        assert!(c.matches(ElementRef::new(0, ElementKind::Remove), ElementKind::Remove));
        assert!(!c.matches(ElementRef::new(0, ElementKind::Remove), ElementKind::Toggle));
    }

    #[test]
    fn remove_visible_on_hover_or_focus_only() {
        let mut c = container(&["a", "b", "c"]);
        assert!(!c.remove_visible(0));
        c.set_hover(Some(0));
        c.set_focus(Some(ElementRef::new(2, ElementKind::Row)));
        assert!(c.remove_visible(0));
        assert!(!c.remove_visible(1));
        assert!(c.remove_visible(2));
    }

    #[test]
    fn focus_scrolls_into_view() {
        let mut c = ListContainer::new();
        c.layout(Rect::new(0, 0, 20, 2));
        c.replace_children(fragments(&["a", "b", "c", "d"]));
        c.set_focus(Some(ElementRef::new(3, ElementKind::Row)));
        assert_eq!(c.scroll(), 2);
        assert_eq!(c.row_at(0, 1), Some(3));
        // scrolled-out rows can not be hit
        assert_eq!(c.rows()[0].layout, RowLayout::default());
        c.set_focus(Some(ElementRef::new(0, ElementKind::Row)));
        assert_eq!(c.scroll(), 0);
    }

    #[test]
    fn reset_text_restores_rendered_label() {
        let mut c = container(&["a"]);
        *c.text_content_mut(0).unwrap() = "changed".into();
        c.reset_text(0);
        assert_eq!(c.text_content(0), Some("item a"));
    }
}
