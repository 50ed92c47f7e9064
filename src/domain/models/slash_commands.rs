#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }

        let prefix = args.remove(0);
        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_language()
            || cmd.is_copy_code()
            || cmd.is_copy_explanation()
            || cmd.is_save_code()
            || cmd.is_save_conversation()
            || cmd.is_theme()
            || cmd.is_new_chat()
            || cmd.is_clear_history()
        {
            return Some(cmd);
        }

        return None;
    }

    fn first_arg(&self) -> String {
        return self
            .args
            .first()
            .map(|e| return e.to_lowercase())
            .unwrap_or_default();
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_language(&self) -> bool {
        return ["/l", "/lang", "/language"].contains(&self.command.as_str());
    }

    /// `/copy` with no argument copies the code.
    pub fn is_copy_code(&self) -> bool {
        return ["/c", "/copy"].contains(&self.command.as_str())
            && ["", "code"].contains(&self.first_arg().as_str());
    }

    pub fn is_copy_explanation(&self) -> bool {
        return ["/c", "/copy"].contains(&self.command.as_str())
            && ["e", "explanation"].contains(&self.first_arg().as_str());
    }

    /// `/save` with no argument saves the code.
    pub fn is_save_code(&self) -> bool {
        return ["/s", "/save"].contains(&self.command.as_str())
            && ["", "code"].contains(&self.first_arg().as_str());
    }

    pub fn is_save_conversation(&self) -> bool {
        return ["/s", "/save"].contains(&self.command.as_str())
            && ["conv", "conversation"].contains(&self.first_arg().as_str());
    }

    pub fn is_theme(&self) -> bool {
        return ["/t", "/theme"].contains(&self.command.as_str());
    }

    pub fn is_new_chat(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_clear_history(&self) -> bool {
        return ["/clear"].contains(&self.command.as_str());
    }
}
