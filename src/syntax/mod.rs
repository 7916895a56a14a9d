pub mod lexer;
pub mod token;
pub mod token_stream;
pub mod token_type;

pub use lexer::Lexer;
pub use token::Token;
pub use token_stream::TokenStream;
pub use token_type::TokenType;
