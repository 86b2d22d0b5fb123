mod article_repo;
mod comment_repo;
mod topic_repo;
mod user_repo;

pub use article_repo::ArticleRepo;
pub use comment_repo::CommentRepo;
pub use topic_repo::TopicRepo;
pub use user_repo::UserRepo;
