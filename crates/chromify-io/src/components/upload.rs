//! File upload component with drag-and-drop and file picker.

use chromify_core::MediaType;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdImage, LdUpload};
use dioxus_free_icons::Icon;

/// Pick the file the intake contract forwards: the first one whose
/// declared name maps into the allow-list.
///
/// Zero candidates (or none accepted) means no-op; everything after the
/// first accepted file is silently ignored. That is a policy choice,
/// not an error, so nothing is reported for the skipped files.
fn first_accepted(names: impl IntoIterator<Item = String>) -> Option<(usize, MediaType)> {
    names
        .into_iter()
        .enumerate()
        .find_map(|(i, name)| MediaType::from_filename(&name).map(|t| (i, t)))
}

/// Props for the [`ImageUploader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageUploaderProps {
    /// Called exactly once per accepted selection with the raw file
    /// bytes and the declared media type.
    on_upload: EventHandler<(Vec<u8>, MediaType)>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts JPEG, PNG, GIF, and WebP images. Of a multi-file drop only
/// the first accepted file is used; files outside the allow-list are
/// never offered. When a file is selected, reads the bytes and fires
/// `on_upload` with `(bytes, media_type)`.
#[component]
pub fn ImageUploader(props: ImageUploaderProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Validate, read, and forward the first accepted file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the intake contract lives in one place.
    let process_files = move |files: Vec<FileData>| async move {
        let Some((index, media_type)) = first_accepted(files.iter().map(FileData::name)) else {
            return;
        };
        let Some(file) = files.get(index) else {
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => {
                error.set(None);
                props.on_upload.call((bytes.to_vec(), media_type));
            }
            Err(e) => {
                error.set(Some(format!("Failed to read file: {e}")));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone-active"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            div { class: "upload-badge",
                Icon { icon: LdUpload, width: 40, height: 40 }
            }

            h3 { class: "upload-title", "Upload your grayscale image" }
            p { class: "upload-hint",
                "Drag and drop your image here, or click to browse your files"
            }

            if let Some(ref err) = error() {
                p { class: "upload-error", "{err}" }
            }

            label { class: "button button-primary",
                input {
                    r#type: "file",
                    accept: MediaType::PICKER_ACCEPT,
                    class: "visually-hidden",
                    onchange: handle_files,
                }
                Icon { icon: LdImage, width: 16, height: 16 }
                "Browse Files"
            }

            p { class: "upload-formats", "Supported formats: JPEG, PNG, GIF, WEBP" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn zero_files_is_a_no_op() {
        assert_eq!(first_accepted(names(&[])), None);
    }

    #[test]
    fn forwards_exactly_the_first_accepted_file() {
        assert_eq!(
            first_accepted(names(&["a.png", "b.jpg", "c.gif"])),
            Some((0, MediaType::Png))
        );
    }

    #[test]
    fn skips_leading_files_outside_the_allow_list() {
        assert_eq!(
            first_accepted(names(&["notes.txt", "scan.tiff", "photo.jpeg"])),
            Some((2, MediaType::Jpeg))
        );
    }

    #[test]
    fn nothing_accepted_means_nothing_forwarded() {
        assert_eq!(first_accepted(names(&["a.txt", "b.svg"])), None);
    }
}
