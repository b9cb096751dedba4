#[cfg(test)]
mod tests {
    use crate::codegen::render;
    use crate::collector::Collector;
    use crate::config::Config;
    use crate::encoder::{self, LINE_WIDTH};
    use crate::registry::Bundle;

    fn render_with(config: Config, files: &[(&str, &[u8])]) -> (Bundle, String) {
        let resolved = config.resolve().unwrap();
        let mut collector = Collector::from_config(&resolved);
        for (path, data) in files {
            collector.add_file(path, data, 1_600_000_000).unwrap();
        }
        let bundle = Bundle::build(&collector.build(), &resolved).unwrap();
        let source = render(&bundle, &resolved).unwrap();
        (bundle, source)
    }

    /// Payload text of the n-th file entry, as concat! would assemble it
    fn payload_of(source: &str, n: usize) -> String {
        let block = source.split("concat!(\n").nth(n + 1).unwrap();
        block
            .lines()
            .take_while(|line| line.trim() != "),")
            .map(|line| line.trim().trim_end_matches(',').trim_matches('"'))
            .collect()
    }

    #[test]
    fn test_header_and_footer() {
        let (_, source) = render_with(
            Config::new(["web"])
                .module("web_assets")
                .invocation("-o assets.rs web"),
            &[("web/index.html", b"<p>hi</p>")],
        );

        assert!(source.starts_with("// Code generated by \"embedfs -o assets.rs web\"; DO NOT EDIT.\n"));
        assert!(source.contains("pub mod web_assets {"));
        assert!(source.contains("    pub fn fs(use_local: bool) -> Box<dyn FileSystem<'static>> {"));
        assert!(source.contains("    pub fn must_read_string(use_local: bool, name: &str) -> String {"));
        assert!(source.ends_with("    ];\n}\n"));
        assert!(!source.contains('@'));
    }

    #[test]
    fn test_private_visibility() {
        let (_, source) = render_with(Config::new(["x"]).private(true), &[("x/a.txt", b"a")]);

        assert!(source.contains("pub(crate) mod assets {"));
        assert!(source.contains("    pub(crate) fn read_bytes("));
        assert!(!source.contains("    pub fn "));
    }

    #[test]
    fn test_empty_invocation() {
        let (_, source) = render_with(Config::new(["x"]), &[]);
        assert!(source.starts_with("// Code generated by \"embedfs\"; DO NOT EDIT."));
    }

    #[test]
    fn test_invocation_newlines_stay_in_comment() {
        let (_, source) = render_with(Config::new(["x"]).invocation("a\nb"), &[]);
        assert!(source.starts_with("// Code generated by \"embedfs a b\"; DO NOT EDIT.\n"));
    }

    #[test]
    fn test_entries_sorted_files_then_dirs() {
        let (_, source) = render_with(
            Config::new(["site"]).prefix("site/"),
            &[
                ("site/z.txt", b"z"),
                ("site/a/b.txt", b"b"),
                ("site/m.txt", b""),
            ],
        );

        let order: Vec<usize> = [
            "\"/a/b.txt\",",
            "\"/m.txt\",",
            "\"/z.txt\",",
            "Entry::dir(\"/\", \"site\"),",
            "Entry::dir(\"/a\", \"site/a\"),",
        ]
        .iter()
        .map(|needle| source.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_file_entry_fields() {
        let (bundle, source) =
            render_with(Config::new(["d"]).prefix("d").mod_time("42"), &[("d/f.txt", b"0123456789")]);

        let file = &bundle.files[0];
        let expected = format!(
            "        Entry::file(\n            \"/f.txt\",\n            \"d/f.txt\",\n            10,\n            42,\n            concat!(\n                \"{}\",\n",
            &file.payload[..file.payload.len().min(LINE_WIDTH)]
        );
        assert!(source.contains(&expected), "unexpected entry layout:\n{}", source);
    }

    #[test]
    fn test_payload_lines_are_wrapped_and_decode() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i * 7919 % 251) as u8).collect();
        let (bundle, source) = render_with(Config::new(["."]), &[("blob.bin", &data)]);

        let block = source.split("concat!(\n").nth(1).unwrap();
        for line in block.lines().take_while(|line| line.trim() != "),") {
            let literal = line.trim().trim_end_matches(',').trim_matches('"');
            assert!(literal.len() <= LINE_WIDTH);
        }

        let payload = payload_of(&source, 0);
        assert_eq!(payload, bundle.files[0].payload);
        assert_eq!(encoder::decode(&payload, data.len() as u64).unwrap(), data);
    }

    #[test]
    fn test_paths_are_escaped() {
        let (_, source) = render_with(Config::new(["."]), &[("odd \"name\"\\x.txt", b"q")]);
        assert!(source.contains(r#""/odd \"name\"\\x.txt","#));
    }

    #[test]
    fn test_output_is_reproducible() {
        let files: &[(&str, &[u8])] = &[("b.txt", b"bee"), ("a/c.txt", b"sea")];
        let (_, first) = render_with(Config::new(["."]), files);
        let (_, second) = render_with(Config::new(["."]), files);
        assert_eq!(first, second);
    }
}
