//! Static context menu shown under a row preview.

/// Actions offered for a long-pressed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Resend,
    ResendAsPriority,
    Forward,
    Details,
    Recall,
}

impl MenuAction {
    /// All actions in display order.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Resend,
        MenuAction::ResendAsPriority,
        MenuAction::Forward,
        MenuAction::Details,
        MenuAction::Recall,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MenuAction::Resend => "Resend",
            MenuAction::ResendAsPriority => "Resend as Priority",
            MenuAction::Forward => "Forward",
            MenuAction::Details => "Details",
            MenuAction::Recall => "Recall",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuAction::Resend => "↺",
            MenuAction::ResendAsPriority => "⟳",
            MenuAction::Forward => "↱",
            MenuAction::Details => "ⓘ",
            MenuAction::Recall => "↩",
        }
    }

    /// Destructive actions render in red.
    pub fn is_destructive(&self) -> bool {
        matches!(self, MenuAction::Recall)
    }
}

/// Cursor over [`MenuAction::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_action(&self) -> MenuAction {
        MenuAction::ALL[self.selected]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MenuAction::ALL.len();
    }

    pub fn previous(&mut self) {
        self.selected = (self.selected + MenuAction::ALL.len() - 1) % MenuAction::ALL.len();
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}
