#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeType {
    Info,
    Error,
}

/// A modal message box. The screen shows it until any key is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    ntype: NoticeType,
}

impl Notice {
    pub fn info(title: &str, text: &str) -> Notice {
        return Notice {
            title: title.to_string(),
            text: text.to_string(),
            ntype: NoticeType::Info,
        };
    }

    pub fn error(title: &str, text: &str) -> Notice {
        return Notice {
            title: title.to_string(),
            text: text.to_string(),
            ntype: NoticeType::Error,
        };
    }

    pub fn notice_type(&self) -> NoticeType {
        return self.ntype;
    }
}
