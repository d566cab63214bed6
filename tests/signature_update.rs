mod common;

use common::EXISTING_GUARDFILE;
use guardgen::errors::GuardError;
use guardgen::stubs::StubRepository;
use guardgen_test_utils::builders::ConfigBuilder;
use guardgen_test_utils::{init_tracing, MockProject};

fn project() -> MockProject {
    let cfg = ConfigBuilder::new()
        .with_default_paths()
        .concat("css", &["normalize.css", "site.css", "main.min.css"])
        .concat("js", &["vendor/jquery", "app.js"])
        .option("sass", "style", ":compressed")
        .build();
    MockProject::new(cfg)
}

#[test]
fn concat_css_update_replaces_only_its_block() {
    init_tracing();
    let project = project().with_guardfile(EXISTING_GUARDFILE);

    let replaced = project.guardfile.update_signature("concat-css").unwrap();
    assert_eq!(replaced, 1);

    let expected = EXISTING_GUARDFILE.replace(
        "files: %w(reset site)",
        "files: %w(normalize site)",
    );
    assert_eq!(project.guardfile_contents(), expected);
}

#[test]
fn plain_plugin_update_replaces_block_up_to_blank_line() {
    let project = project().with_guardfile(EXISTING_GUARDFILE);

    project.guardfile.update_signature("sass").unwrap();

    let expected = EXISTING_GUARDFILE.replace(
        "guard :sass, :input => 'app/assets/sass', :output => 'public/css'\n",
        "guard :sass, :input => 'app/assets/sass', :output => 'public/css', :style => :compressed\n",
    );
    assert_eq!(project.guardfile_contents(), expected);
}

#[test]
fn last_block_keeps_the_trailing_newline() {
    let cfg = ConfigBuilder::new().path("js", "assets/js").build();
    let project = MockProject::new(cfg).with_guardfile(EXISTING_GUARDFILE);

    project.guardfile.update_signature("uglify").unwrap();

    let contents = project.guardfile_contents();
    assert!(contents.ends_with(
        "guard :uglify, :input => 'assets/js/main.js', :output => 'assets/js/main.min.js'\n"
    ));
    assert!(contents.starts_with("guard :sass, :input => 'app/assets/sass'"));
}

#[test]
fn missing_block_leaves_contents_unchanged() {
    let project = project().with_guardfile(EXISTING_GUARDFILE);

    let replaced = project.guardfile.update_signature("coffeescript").unwrap();

    assert_eq!(replaced, 0);
    assert_eq!(project.guardfile_contents(), EXISTING_GUARDFILE);
    // Still a whole-file rewrite.
    assert_eq!(project.fs.write_count(), 1);
}

#[test]
fn unknown_plugin_fails_before_touching_the_file() {
    let project = project().with_guardfile(EXISTING_GUARDFILE);

    let err = project.guardfile.update_signature("grunt").unwrap_err();

    assert!(matches!(err, GuardError::StubNotFound(_)));
    assert_eq!(project.fs.write_count(), 0);
}

#[test]
fn similarly_named_plugin_is_not_claimed() {
    let contents = "guard :sass_lint, :all => true\n\nguard :sass, :input => 'x'\n";
    let project = project().with_guardfile(contents);

    project.guardfile.update_signature("sass").unwrap();

    assert_eq!(
        project.guardfile_contents(),
        "guard :sass_lint, :all => true\n\n\
         guard :sass, :input => 'app/assets/sass', :output => 'public/css', :style => :compressed\n"
    );
}

#[test]
fn refresher_update_replaces_module_wrapper_too() {
    let stale = "\
guard :sass, :input => 'a', :output => 'b'

module ::Guard
  class Refresher < Guard
    def run_all
      puts 'old'
    end
  end
end

guard :refresher do
  watch(%r[old/.+])
end

guard :uglify, :input => 'x'
";
    let project = project().with_guardfile(stale);

    assert_eq!(project.guardfile.update_signature("refresher").unwrap(), 1);

    let refresher = project.guardfile.get_stubs(["refresher"]).unwrap();
    let expected = format!(
        "guard :sass, :input => 'a', :output => 'b'\n\n{refresher}\n\nguard :uglify, :input => 'x'\n"
    );
    assert_eq!(project.guardfile_contents(), expected);
    assert_eq!(project.guardfile_contents().matches("module ::Guard").count(), 1);
}

#[test]
fn updating_a_fresh_guardfile_is_stable() {
    let project = project();
    let plugins: Vec<&str> = StubRepository::known_plugins().collect();

    project.guardfile.make(&plugins).unwrap();
    let generated = project.guardfile_contents();

    for plugin in &plugins {
        assert_eq!(
            project.guardfile.update_signature(plugin).unwrap(),
            1,
            "{plugin} block not found in generated Guardfile"
        );
    }
    assert_eq!(project.guardfile_contents(), generated);
}

#[test]
fn append_then_update_round_trip() {
    let project = project().with_guardfile("guard :sass, :input => 'x'\n\n\n");

    project.guardfile.append_signature("concat-js").unwrap();
    assert_eq!(
        project.guardfile_contents(),
        "guard :sass, :input => 'x'\n\n\
         guard :concat, type: \"js\", files: %w(vendor/jquery app), input_dir: \"public/js\", output: \"public/js/main\"\n"
    );

    assert_eq!(project.guardfile.update_signature("concat-js").unwrap(), 1);
}

#[test]
fn refresh_updates_both_concat_blocks() {
    let project = project().with_guardfile(EXISTING_GUARDFILE);

    let refreshed = project.guardfile.refresh().unwrap();

    assert_eq!(refreshed, vec!["concat-js", "concat-css"]);
    let contents = project.guardfile_contents();
    assert!(contents.contains("files: %w(normalize site)"));
    assert!(contents.contains("files: %w(vendor/jquery app)"));
}

#[test]
fn refresh_skips_languages_without_a_block() {
    let js_only = "guard :concat, type: \"js\", files: %w(old), input_dir: \"public/js\", output: \"public/js/main\"\n";
    let project = project().with_guardfile(js_only);

    let refreshed = project.guardfile.refresh().unwrap();

    assert_eq!(refreshed, vec!["concat-js"]);
    assert_eq!(
        project.guardfile_contents(),
        "guard :concat, type: \"js\", files: %w(vendor/jquery app), input_dir: \"public/js\", output: \"public/js/main\"\n"
    );
}
