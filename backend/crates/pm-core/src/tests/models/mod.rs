mod issue;
mod perspective_camera;
mod project;
