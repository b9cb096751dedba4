#[cfg(test)]
mod tests {
    use crate::path::PathNormalizer;

    // ========================================================================
    // normalize
    // ========================================================================

    #[test]
    fn test_prefix_stripped() {
        assert_eq!(PathNormalizer::normalize("/a/b/c/d.txt", "/a/b"), "/c/d.txt");
    }

    #[test]
    fn test_prefix_not_matching_is_kept() {
        assert_eq!(
            PathNormalizer::normalize("/x/y/z.txt", "/a/b"),
            "/x/y/z.txt"
        );
    }

    #[test]
    fn test_relative_path_gets_leading_slash() {
        assert_eq!(PathNormalizer::normalize("static/app.js", ""), "/static/app.js");
    }

    #[test]
    fn test_prefix_is_plain_string_match() {
        // Not segment-aware: "/a/b" also strips the front of "/a/bc".
        assert_eq!(PathNormalizer::normalize("/a/bc/d.txt", "/a/b"), "/c/d.txt");
    }

    #[test]
    fn test_prefix_with_trailing_slash() {
        assert_eq!(
            PathNormalizer::normalize("testdata/sub/x.txt", "testdata/"),
            "/sub/x.txt"
        );
    }

    #[test]
    fn test_dot_segments_collapsed() {
        assert_eq!(PathNormalizer::normalize("./a/./b//c.txt", ""), "/a/b/c.txt");
        assert_eq!(PathNormalizer::normalize("a/../../b.txt", ""), "/b.txt");
    }

    #[test]
    fn test_path_equal_to_prefix_becomes_root() {
        assert_eq!(PathNormalizer::normalize("/a/b", "/a/b"), "/");
    }

    // ========================================================================
    // clean
    // ========================================================================

    #[test]
    fn test_clean_cases() {
        let cases = vec![
            ("", "."),
            ("/", "/"),
            ("//", "/"),
            ("a/b/", "a/b"),
            ("./a", "a"),
            ("a/./b", "a/b"),
            ("a/b/..", "a"),
            ("../a", "../a"),
            ("../../a/..", "../.."),
            ("/../a", "/a"),
            ("a/..", "."),
        ];

        for (input, expected) in cases {
            assert_eq!(PathNormalizer::clean(input), expected, "Failed for {:?}", input);
        }
    }

    // ========================================================================
    // local_dir
    // ========================================================================

    #[test]
    fn test_local_dir_root_without_prefix() {
        assert_eq!(PathNormalizer::local_dir("", "/"), ".");
    }

    #[test]
    fn test_local_dir_root_with_prefix() {
        assert_eq!(PathNormalizer::local_dir("testdata", "/"), "testdata");
    }

    #[test]
    fn test_local_dir_nested() {
        assert_eq!(PathNormalizer::local_dir("testdata/", "/sub"), "testdata/sub");
        assert_eq!(PathNormalizer::local_dir("", "/sub/deeper"), "sub/deeper");
    }

    #[test]
    fn test_local_dir_strips_leading_slash() {
        assert_eq!(PathNormalizer::local_dir("/srv/assets", "/css"), "srv/assets/css");
    }

    // ========================================================================
    // base
    // ========================================================================

    #[test]
    fn test_base() {
        assert_eq!(PathNormalizer::base("testdata/README.md"), "README.md");
        assert_eq!(PathNormalizer::base("README.md"), "README.md");
        assert_eq!(PathNormalizer::base("a/b/"), "b");
        assert_eq!(PathNormalizer::base("."), ".");
        assert_eq!(PathNormalizer::base(""), ".");
        assert_eq!(PathNormalizer::base("/"), "/");
    }
}
