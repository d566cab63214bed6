#![allow(dead_code)]

/// A Guardfile as `guardgen make` would have written it some time ago.
pub const EXISTING_GUARDFILE: &str = "\
guard :sass, :input => 'app/assets/sass', :output => 'public/css'

guard :concat, type: \"css\", files: %w(reset site), input_dir: \"public/css\", output: \"public/css/main\"

guard :concat, type: \"js\", files: %w(jquery app), input_dir: \"public/js\", output: \"public/js/main\"

guard :uglify, :input => 'public/js/main.js', :output => 'public/js/main.min.js'
";
