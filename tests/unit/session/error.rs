use super::*;

const ALL: [SessionError; 5] = [
    SessionError::InvalidFileType,
    SessionError::ReadFailure,
    SessionError::DisplayFailure,
    SessionError::MissingInputs,
    SessionError::SaveFailure,
];

#[test]
fn display_matches_fixed_message() {
    for err in ALL {
        assert_eq!(err.to_string(), err.message());
    }
}

#[test]
fn messages_are_exact() {
    let expected = [
        "Please choose an image file.",
        "The image could not be read. Please try another file.",
        "The image could not be displayed. Please try another file.",
        "Load an image and choose a filter before downloading.",
        "The filtered image could not be saved.",
    ];
    for (err, text) in ALL.into_iter().zip(expected) {
        assert_eq!(err.to_string(), text);
    }
}
