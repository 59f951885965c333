mod blog_list;
mod blog_post;
mod home;

pub use blog_list::BlogListPage;
pub use blog_post::BlogPostPage;
pub use home::HomePage;
