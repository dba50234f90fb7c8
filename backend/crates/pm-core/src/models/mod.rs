pub mod custom_value;
pub mod issue;
pub mod issue_comment;
pub mod perspective_camera;
pub mod project;
pub mod vector3;
pub mod viewpoint;
pub mod visibility_exception;
pub mod wiki_page;
