use serde::Serialize;

/// Content currently shown in the launcher dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveView {
    #[default]
    None,
    CarGame,
    PowerBi,
}

impl ActiveView {
    /// Whether the dialog overlay is rendered.
    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveView::None)
    }

    /// Title shown in the dialog header.
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::None => "",
            ActiveView::CarGame => "Car Game",
            ActiveView::PowerBi => "Power BI",
        }
    }

    /// Dismiss the dialog. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = ActiveView::None;
        was_open
    }
}
