use async_trait::async_trait;
use mockall::mock;
use blogcore::{
    comment::{
        Comment,
        Comments,
        traits::CommentBackend,
    },
    error::BackendError,
    platform::{
        DefaultBlogPlatform,
        PlatformUrl,
    },
    post::{
        Post,
        Posts,
        traits::PostBackend,
    },
    tag::{
        Tag,
        Tags,
        traits::TagBackend,
    },
    user::{
        User,
        traits::UserBackend,
    },
    workflow::State,
};

mock! {
    pub Platform {}

    #[async_trait]
    impl UserBackend for Platform {
        async fn add_user(&self, name: &str) -> Result<i64, BackendError>;
        async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, BackendError>;
        async fn get_user_by_name(&self, name: &str) -> Result<Option<User>, BackendError>;
        async fn list_users(&self) -> Result<Vec<User>, BackendError>;
        async fn delete_user(&self, id: i64) -> Result<bool, BackendError>;
    }

    #[async_trait]
    impl PostBackend for Platform {
        async fn add_post(
            &self, title: &str, body: &str, author_id: i64
        ) -> Result<i64, BackendError>;
        async fn get_post_by_id(&self, id: i64) -> Result<Option<Post>, BackendError>;
        async fn list_posts(&self) -> Result<Posts, BackendError>;
        async fn update_post(
            &self, id: i64, title: &str, body: &str, author_id: i64
        ) -> Result<bool, BackendError>;
        async fn set_post_state(
            &self, id: i64, expected: State, state: State
        ) -> Result<bool, BackendError>;
        async fn delete_post(&self, id: i64) -> Result<bool, BackendError>;
    }

    #[async_trait]
    impl CommentBackend for Platform {
        async fn add_comment(
            &self, post_id: i64, body: &str, author_id: i64
        ) -> Result<i64, BackendError>;
        async fn get_comment_by_id(&self, id: i64) -> Result<Option<Comment>, BackendError>;
        async fn list_comments(&self) -> Result<Comments, BackendError>;
        async fn list_comments_for_post(&self, post_id: i64) -> Result<Comments, BackendError>;
        async fn update_comment(
            &self, id: i64, post_id: i64, body: &str, author_id: i64
        ) -> Result<bool, BackendError>;
        async fn delete_comment(&self, id: i64) -> Result<bool, BackendError>;
    }

    #[async_trait]
    impl TagBackend for Platform {
        async fn add_tag(&self, name: &str) -> Result<i64, BackendError>;
        async fn get_tag_by_id(&self, id: i64) -> Result<Option<Tag>, BackendError>;
        async fn list_tags(&self) -> Result<Tags, BackendError>;
        async fn update_tag(&self, id: i64, name: &str) -> Result<bool, BackendError>;
        async fn delete_tag(&self, id: i64) -> Result<bool, BackendError>;
        async fn set_post_tags(&self, post_id: i64, tag_ids: &[i64]) -> Result<(), BackendError>;
        async fn get_tags_for_post(&self, post_id: i64) -> Result<Tags, BackendError>;
    }
}

impl PlatformUrl for MockPlatform {
    fn url(&self) -> &str {
        "mock::memory:"
    }
}

impl DefaultBlogPlatform for MockPlatform {}
