pub mod utils {
    use adtc_driver::{Options, Source, compile_source};
    use std::path::PathBuf;

    pub fn data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Compile `data/{name}.adt` and compare it with `data/{name}.ts`.
    pub fn wrapper_golden(name: &str, options: &Options) {
        let dir = data_dir();
        let source = Source::read(&dir.join(format!("{name}.adt"))).unwrap();
        let expected = std::fs::read_to_string(dir.join(format!("{name}.ts"))).unwrap();
        match compile_source(&source, options) {
            | Ok(output) => pretty_assertions::assert_eq!(output.trim_end(), expected.trim_end()),
            | Err(err) => {
                eprintln!("{}", err);
                panic!("Error compiling {}", source.name);
            }
        }
    }
}

#[macro_export]
macro_rules! golden {
    ($name:ident, $file:expr) => {
        $crate::golden!($name, $file, adtc_driver::Options::default());
    };
    ($name:ident, $file:expr, $options:expr) => {
        #[test]
        fn $name() {
            $crate::utils::wrapper_golden($file, &$options);
        }
    };
}
