// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, Exchange, ExchangeStatus, Review, Skill, SkillCategory, SkillLevel, User};
pub use requests::{
    ActingUserQuery, CategoryRequest, CreateExchangeRequest, CreateReviewRequest,
    CreateSkillRequest, CreateUserRequest, CurrentUserQuery, ListExchangesQuery, ListReviewsQuery,
    ListSkillsQuery, PaginationQuery, ReviewerQuery, SenderQuery, UpdateExchangeRequest,
    UpdateSkillRequest, UpdateUserRequest,
};
pub use responses::{
    ActiveUserRow, ErrorResponse, ExchangeDetail, HealthResponse, PhotoResponse, ReviewDetail,
    SkillDetail, SkillMatch, SkillMatchesResponse, SuccessRate, TopSkillRow, UserRating,
};
