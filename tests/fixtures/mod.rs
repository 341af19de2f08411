//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the keymap-readme binary
pub fn keymap_readme_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keymap-readme")
}

/// 42 `&kp` bindings laid out the way a split 3x6+3 keymap writes them.
pub fn full_layer_bindings() -> String {
    let rows = [
        "&kp TAB   &kp Q &kp W &kp E &kp R &kp T   &kp Y &kp U &kp I     &kp O   &kp P    &kp BSPC",
        "&kp LCTRL &kp A &kp S &kp D &kp F &kp G   &kp H &kp J &kp K     &kp L   &kp SEMI &kp SQT",
        "&kp LSHFT &kp Z &kp X &kp C &kp V &kp B   &kp N &kp M &kp COMMA &kp DOT &kp FSLH &kp ESC",
        "              &kp LGUI &mo 1 &kp SPACE   &kp RET &mo 2 &kp RALT",
    ];
    rows.map(|row| format!("                {row}\n")).concat()
}

/// 42 bindings mixing every formatted behavior.
pub fn mixed_layer_bindings() -> String {
    let mut keys: Vec<String> = vec!["&trans".to_string(); 36];
    keys[0] = "&bt BT_SEL 0".to_string();
    keys[1] = "&out OUT_USB".to_string();
    keys[2] = "&tog 3".to_string();
    keys[3] = "&mt LCTRL ESC".to_string();
    keys[4] = "&kp LS(N1)".to_string();
    keys[5] = "&bootloader".to_string();
    keys.extend(
        ["&kp LGUI", "&mo 1", "&kp SPACE", "&kp RET", "&mo 2", "&kp RALT"].map(str::to_string),
    );
    keys.join(" ")
}

/// Wraps layer nodes into a complete keymap source.
pub fn keymap_source(layers: &[(&str, &str, &str)]) -> String {
    let mut nodes = String::new();
    for (node, label, bindings) in layers {
        nodes.push_str(&format!(
            "        {node} {{\n            label = \"{label}\";\n            bindings = <\n{bindings}\n            >;\n        }};\n\n"
        ));
    }

    format!(
        "#include <behaviors.dtsi>\n\
         #include <dt-bindings/zmk/keys.h>\n\
         #include <dt-bindings/zmk/bt.h>\n\
         \n\
         / {{\n\
         \x20   /* Layers */\n\
         \x20   keymap {{\n\
         \x20       compatible = \"zmk,keymap\";\n\
         \n\
         {nodes}\
         \x20   }};\n\
         }};\n"
    )
}

/// README with a stale layout section between two other sections.
pub fn readme_with_section() -> String {
    "# Kometa\n\
     \n\
     Split keyboard, 3x6+3.\n\
     \n\
     ## Раскладка\n\
     \n\
     outdated table\n\
     \n\
     ## Прошивка\n\
     \n\
     Build with GitHub Actions.\n"
        .to_string()
}

/// A temp workspace holding a README and a keymap.
pub struct Workspace {
    pub dir: TempDir,
    pub readme: PathBuf,
    pub keymap: PathBuf,
}

impl Workspace {
    /// Creates `readme.md` and `config/kometa.keymap` in a fresh temp dir.
    pub fn new(readme: &str, keymap: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let readme_path = dir.path().join("readme.md");
        let keymap_path = dir.path().join("config").join("kometa.keymap");

        fs::create_dir_all(keymap_path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(&readme_path, readme).expect("Failed to write readme");
        fs::write(&keymap_path, keymap).expect("Failed to write keymap");

        Self {
            dir,
            readme: readme_path,
            keymap: keymap_path,
        }
    }

    /// Config file location used by every run; absent unless a test writes it.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("keymap-readme.toml")
    }

    /// Runs the binary inside the workspace with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(keymap_readme_bin())
            .current_dir(self.dir.path())
            .env("KEYMAP_README_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs the binary with explicit `--readme` and `--keymap` paths.
    pub fn run_with_paths(&self) -> Output {
        self.run(&[
            "--readme",
            path_str(&self.readme),
            "--keymap",
            path_str(&self.keymap),
        ])
    }

    pub fn readme_content(&self) -> String {
        fs::read_to_string(&self.readme).expect("Failed to read readme")
    }
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are valid UTF-8")
}
