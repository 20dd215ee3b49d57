use brewgen::*;
use brewgen::descriptor::ReleaseDescriptor;

fn setup_descriptor() -> ReleaseDescriptor {
    let mut d = ReleaseDescriptor::new("jpillora", "serve", "1.7.2");
    for name in [
        "serve_darwin_386.gz",
        "serve_darwin_amd64.gz",
        "serve_linux_386.gz",
        "serve_linux_amd64.gz",
        "serve_linux_arm64.gz",
    ] {
        d.assets.push(Asset::classified(
            name,
            &format!("https://github.com/jpillora/serve/releases/download/1.7.2/{name}"),
            None,
        ));
    }
    d
}

#[cfg(test)]
mod tests {
    use brewgen::descriptor::ReleaseDescriptor;
    use brewgen::formula::render_formula;
    use brewgen::summary::render_summary;
    use crate::setup_descriptor;

    #[test]
    fn test_classified_descriptor_renders_full_chain() {
        let d = setup_descriptor();
        let formula = render_formula(&d).unwrap();
        // four intel branches in asset order, the arm64 asset gets none
        assert!(formula.contains("if !OS.linux? && !Hardware.is_64_bit?"));
        assert!(formula.contains("elsif !OS.linux? && Hardware.is_64_bit?"));
        assert!(formula.contains("elsif OS.linux? && !Hardware.is_64_bit?"));
        assert!(formula.contains("elsif OS.linux? && Hardware.is_64_bit?"));
        assert!(!formula.contains("serve_linux_arm64.gz"));
        assert!(formula.contains("depends_on :arch => :intel"));
        let darwin = formula.find("serve_darwin_386.gz").unwrap();
        let linux = formula.find("serve_linux_amd64.gz").unwrap();
        assert!(darwin < linux);
    }

    #[test]
    fn test_formula_round_trips_through_descriptor_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serve.toml");
        let d = setup_descriptor();
        d.save(&path).unwrap();
        let loaded = ReleaseDescriptor::load(&path).unwrap();
        assert_eq!(render_formula(&loaded).unwrap(), render_formula(&d).unwrap());
    }

    #[test]
    fn test_summary_lists_all_assets() {
        let d = setup_descriptor();
        let text = render_summary(&d).unwrap();
        assert!(text.contains("repository: https://github.com/jpillora/serve"));
        assert!(text.contains("[#05]"));
    }
}
