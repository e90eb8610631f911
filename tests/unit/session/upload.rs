use super::*;

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([1, 2, 3, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn generations_increase() {
    let g = UploadGeneration::default();
    assert!(g.next() > g);
    assert_eq!(g.next().next(), UploadGeneration(2));
}

#[test]
fn decode_carries_generation_and_file() {
    let file = ImageFile::new("a.png", "image/png", png(3, 2));
    let ticket = UploadTicket::new(UploadGeneration(7), file);
    let outcome = ticket.decode();
    assert_eq!(outcome.generation(), UploadGeneration(7));
    assert!(outcome.is_ok());
    assert_eq!(outcome.file.name, "a.png");
}

#[test]
fn decode_failure_is_captured() {
    let file = ImageFile::new("a.png", "image/png", b"garbage".to_vec());
    let outcome = UploadTicket::new(UploadGeneration(1), file).decode();
    assert!(!outcome.is_ok());
}

#[test]
fn tickets_cross_threads() {
    fn assert_send<T: Send>() {}
    assert_send::<UploadTicket>();
    assert_send::<DecodeOutcome>();
}
