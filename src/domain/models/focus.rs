/// Pane receiving keyboard input. Tab cycles through them in order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Request,
    Search,
    History,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Request => return Focus::Search,
            Focus::Search => return Focus::History,
            Focus::History => return Focus::Request,
        }
    }
}
