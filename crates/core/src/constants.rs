//! Constants used throughout the face swap checker.
//!
//! This module contains all path and filename constants so the layout of the
//! working tree is defined in one place.

/// Directory name of the host application, relative to the repository root.
pub const COMFYUI_DIR_NAME: &str = "ComfyUI";

/// Directory holding user-supplied images before they are staged.
pub const INPUT_DIR_NAME: &str = "test_inputs";

/// Directory reserved for workflow outputs.
pub const OUTPUT_DIR_NAME: &str = "test_outputs";

/// Filename of the source face image.
pub const SOURCE_IMAGE_FILENAME: &str = "source_face.png";

/// Filename of the target image.
pub const TARGET_IMAGE_FILENAME: &str = "target_image.png";

/// Filename of the workflow definition the user imports into ComfyUI.
pub const WORKFLOW_FILENAME: &str = "reactor_faceswap_workflow.json";

/// Path segments from the ComfyUI directory to the ReActor extension.
pub const REACTOR_EXTENSION_SEGMENTS: [&str; 2] = ["custom_nodes", "ComfyUI-ReActor"];

/// Path segments from the ComfyUI directory to the buffalo_l face analysis model.
pub const BUFFALO_MODEL_SEGMENTS: [&str; 3] = ["models", "insightface", "buffalo_l"];

/// ComfyUI's own input directory, relative to the ComfyUI directory.
pub const COMFYUI_INPUT_DIR_NAME: &str = "input";

/// Environment variable overriding the repository root.
pub const ROOT_ENV_VAR: &str = "FACESWAP_ROOT";

/// Environment variable overriding the ComfyUI directory.
pub const COMFYUI_DIR_ENV_VAR: &str = "FACESWAP_COMFYUI_DIR";
