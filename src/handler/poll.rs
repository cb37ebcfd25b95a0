pub mod create;
pub use create as Create;

pub mod add_question;
pub use add_question as AddQuestion;

pub mod add_answer;
pub use add_answer as AddAnswer;

pub mod add_vote;
pub use add_vote as AddVote;

pub mod results;
pub use results as Results;
