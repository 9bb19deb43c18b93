//! Cart contents as seen by the header.

/// Ordered item identifiers currently in the cart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartSummary {
    items: Vec<String>,
}

impl CartSummary {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Badge text for the cart icon. Absent for an empty cart.
    pub fn badge(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.len().to_string())
    }

    /// Accessible label for the cart link.
    pub fn link_label(&self) -> String {
        match self.len() {
            0 => "Cart is empty".to_string(),
            1 => "Cart (1 item)".to_string(),
            n => format!("Cart ({} items)", n),
        }
    }
}
