//! Toggleable dropdown menus and their registry.
//!
//! A dropdown is a trigger button plus a menu. The trigger click toggles it
//! and is consumed so the document-level closer does not immediately undo
//! the toggle; clicks anywhere else close it, as does Escape (which hands
//! focus back to the trigger). Clicks inside the menu are consumed unless
//! they land on a link, in which case they bubble and the document closer
//! runs as part of the navigation.
//!
//! The registry wires several dropdowns to one document. In exclusive mode
//! (the admin header variant) opening one closes the rest.

/// Whether an event keeps bubbling to the document-level handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Event consumed; document handlers do not see it.
    Stop,
    /// Event continues to the document handlers.
    Bubble,
}

/// One trigger-button/menu pair.
#[derive(Debug, Clone)]
pub struct Dropdown {
    button_id: String,
    menu_id: String,
    open: bool,
}

impl Dropdown {
    /// Creates a closed dropdown for the given trigger and menu.
    #[must_use]
    pub fn new(button_id: impl Into<String>, menu_id: impl Into<String>) -> Self {
        Self {
            button_id: button_id.into(),
            menu_id: menu_id.into(),
            open: false,
        }
    }

    /// Returns the trigger button id.
    #[must_use]
    pub fn button_id(&self) -> &str {
        &self.button_id
    }

    /// Returns the menu id.
    #[must_use]
    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    /// Returns whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger button clicked: toggles the menu.
    ///
    /// Always consumes the click so the document closer cannot re-close
    /// the menu in the same event.
    pub fn trigger_click(&mut self) -> Propagation {
        self.open = !self.open;
        Propagation::Stop
    }

    /// A click inside the menu; link clicks bubble, everything else stops.
    pub fn menu_click(&mut self, on_link: bool) -> Propagation {
        if on_link {
            Propagation::Bubble
        } else {
            Propagation::Stop
        }
    }

    /// Document-level click: closes the menu if open.
    pub fn document_click(&mut self) {
        self.open = false;
    }

    /// Escape pressed. Returns `true` if the menu closed, in which case
    /// the host moves focus back to the trigger button.
    pub fn escape(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Handle to a dropdown registered in a [`DropdownRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownId(usize);

/// A set of dropdowns sharing one document's click and key handlers.
#[derive(Debug, Clone, Default)]
pub struct DropdownRegistry {
    items: Vec<Dropdown>,
    exclusive: bool,
}

impl DropdownRegistry {
    /// Creates a registry where dropdowns toggle independently.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry where at most one dropdown is open at a time.
    #[must_use]
    pub fn exclusive() -> Self {
        Self {
            items: Vec::new(),
            exclusive: true,
        }
    }

    /// Registers a dropdown and returns its handle.
    pub fn register(&mut self, dropdown: Dropdown) -> DropdownId {
        self.items.push(dropdown);
        DropdownId(self.items.len() - 1)
    }

    /// Returns the dropdown behind `id`, if registered.
    #[must_use]
    pub fn get(&self, id: DropdownId) -> Option<&Dropdown> {
        self.items.get(id.0)
    }

    /// Trigger click for `id`; in exclusive mode an open closes the rest.
    pub fn trigger_click(&mut self, id: DropdownId) -> Propagation {
        let Some(item) = self.items.get_mut(id.0) else {
            return Propagation::Bubble;
        };
        let prop = item.trigger_click();
        if self.exclusive && self.items.get(id.0).is_some_and(Dropdown::is_open) {
            for (i, other) in self.items.iter_mut().enumerate() {
                if i != id.0 {
                    other.close();
                }
            }
        }
        prop
    }

    /// Menu click for `id`.
    pub fn menu_click(&mut self, id: DropdownId, on_link: bool) -> Propagation {
        self.items
            .get_mut(id.0)
            .map_or(Propagation::Bubble, |d| d.menu_click(on_link))
    }

    /// Document-level click: closes every open dropdown.
    pub fn document_click(&mut self) {
        for item in &mut self.items {
            item.document_click();
        }
    }

    /// Escape pressed: closes open dropdowns and returns the one whose
    /// trigger should regain focus, if any.
    pub fn escape(&mut self) -> Option<DropdownId> {
        let mut focus = None;
        for (i, item) in self.items.iter_mut().enumerate() {
            if item.escape() && focus.is_none() {
                focus = Some(DropdownId(i));
            }
        }
        focus
    }

    /// Closes every dropdown unconditionally.
    pub fn close_all(&mut self) {
        for item in &mut self.items {
            item.close();
        }
    }

    /// Returns whether any registered dropdown is open.
    #[must_use]
    pub fn any_open(&self) -> bool {
        self.items.iter().any(Dropdown::is_open)
    }
}
