// CLASSIFICATION: COMMUNITY
// Filename: test_fs_navigation.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

mod common;

use common::{cd, run, terminal};

#[test]
fn ls_lists_home_in_document_order() {
    let mut term = terminal();
    assert_eq!(
        run(&mut term, "ls"),
        [
            "> ls",
            "about.txt documents projects skills certifications experience archive",
        ]
    );
}

#[test]
fn empty_directory_says_so() {
    let mut term = terminal();
    cd(&mut term, &["archive"]);
    assert_eq!(run(&mut term, "ls"), ["> ls", "dir empty"]);
}

#[test]
fn cd_into_and_out_of_directories() {
    let mut term = terminal();
    assert_eq!(run(&mut term, "cd projects"), ["> cd projects"]);
    assert_eq!(term.path().segments(), ["home", "projects"]);
    assert_eq!(term.path().to_string(), "/home/projects");
    assert_eq!(
        run(&mut term, "ls")[1],
        "amazon_reviews airbnb iveims blogai quantiq"
    );
    assert_eq!(run(&mut term, "cd .."), ["> cd .."]);
    assert_eq!(term.path().segments(), ["home"]);
}

#[test]
fn cd_dotdot_at_root_is_a_noop() {
    let mut term = terminal();
    assert_eq!(run(&mut term, "cd .."), ["> cd .."]);
    assert_eq!(run(&mut term, "cd .."), ["> cd .."]);
    assert_eq!(term.path().segments(), ["home"]);
}

#[test]
fn cd_errors_leave_path_alone() {
    let mut term = terminal();
    assert_eq!(run(&mut term, "cd"), ["> cd", "cd: missing argument"]);
    assert_eq!(
        run(&mut term, "cd nowhere"),
        ["> cd nowhere", "cd: nowhere: No such directory"]
    );
    assert_eq!(
        run(&mut term, "cd about.txt"),
        ["> cd about.txt", "cd: about.txt: Not a directory"]
    );
    assert_eq!(term.path().segments(), ["home"]);
}

#[test]
fn directory_names_are_matched_after_lowercasing() {
    let mut term = terminal();
    run(&mut term, "CD Documents");
    assert_eq!(term.path().segments(), ["home", "documents"]);
    assert_eq!(run(&mut term, "ls")[1], "cv.pdf notes.txt");
}

#[test]
fn only_the_first_parameter_counts() {
    let mut term = terminal();
    run(&mut term, "cd skills projects");
    assert_eq!(term.path().segments(), ["home", "skills"]);
}
