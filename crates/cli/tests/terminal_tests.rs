#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use mccmd_cli::cli_args::CreateArgs;
    use mccmd_cli::run_create;
    use mccmd_cli::terminal::TerminalPrompter;
    use mccmd_core::delivery::{ClipboardWriter, DeliveryReport, Notifier};
    use mccmd_core::error::{Error, Result};
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryNotifier {
        sent: Vec<(String, String)>,
    }

    impl Notifier for MemoryNotifier {
        fn notify(&mut self, title: &str, message: &str) -> Result<()> {
            self.sent.push((title.to_string(), message.to_string()));
            Ok(())
        }
    }

    fn catalog_file() -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "- stone\n- diamond_block\n").unwrap();
        temp_file
    }

    fn create_args(catalog: &NamedTempFile) -> CreateArgs {
        CreateArgs {
            blocks_path: Some(catalog.path().to_str().unwrap().to_string()),
            ..CreateArgs::default()
        }
    }

    fn terminal(input: &str) -> TerminalPrompter<Cursor<String>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_say_session_through_terminal() {
        let catalog = catalog_file();
        // 5) say, message, confirm copy
        let mut prompter = terminal("5\nHello, world!\n\n");
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = MemoryNotifier::default();

        let report = run_create(
            &create_args(&catalog),
            &mut prompter,
            &mut clipboard,
            &mut notifier,
        )
        .unwrap();

        assert_eq!(report, DeliveryReport { copied: true, notified: true });
        assert_eq!(clipboard.contents.as_deref(), Some("/say Hello, world!"));
        assert_eq!(notifier.sent.len(), 1);
        assert_eq!(notifier.sent[0].0, "mccmd");

        let output = String::from_utf8_lossy(prompter.output()).into_owned();
        assert!(output.contains("Generated! Command: /say Hello, world!"));
        assert!(output.contains("Press Enter to copy to clipboard..."));
    }

    #[test]
    fn test_setblock_session_with_invalid_menu_answer() {
        let catalog = catalog_file();
        // invalid pick, 3) setblock, position, unknown block, known block
        let mut prompter = terminal("7\n3\n0 64 0\nston\nstone\n");
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = MemoryNotifier::default();

        let args = CreateArgs {
            copy: Some(false),
            silent: true,
            ..create_args(&catalog)
        };
        let report = run_create(&args, &mut prompter, &mut clipboard, &mut notifier).unwrap();

        assert_eq!(report, DeliveryReport::default());
        assert!(clipboard.contents.is_none());
        assert!(notifier.sent.is_empty());

        let output = String::from_utf8_lossy(prompter.output()).into_owned();
        assert!(output.contains("Invalid selection. Please choose 1-6"));
        assert!(output.contains("Unknown block \"ston\". Did you mean: stone"));
        assert!(output.contains("Generated! Command: /setblock 0 64 0 minecraft:stone"));
    }

    #[test]
    fn test_give_session_with_selector_menu() {
        let catalog = catalog_file();
        // 1) give, 1) @p, refine, 5) limit, value, 10) OK, item, no components, amount, confirm
        let mut prompter = terminal("1\n1\ny\n5\n1\n10\ndiamond\nn\n\n\n");
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = MemoryNotifier::default();

        run_create(
            &create_args(&catalog),
            &mut prompter,
            &mut clipboard,
            &mut notifier,
        )
        .unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some("/give @p[limit=1] diamond 1"));
    }

    #[test]
    fn test_closed_input_fails_session() {
        let catalog = catalog_file();
        let mut prompter = terminal("4\n0 0 0\n");

        let result = run_create(
            &create_args(&catalog),
            &mut prompter,
            &mut MemoryClipboard::default(),
            &mut MemoryNotifier::default(),
        );

        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
