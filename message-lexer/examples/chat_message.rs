use message_lexer::MessageParser;

fn main() {
    let parser = MessageParser::new();
    let messages = [
        "deploy \"my app\" --env=prod --!dry-run -v",
        "eval ```1 + 1``` --lang=python",
        "say hi --loud --loud",
    ];

    for message in messages {
        println!("Parsing: {}", message);
        match parser.parse(message) {
            Ok(result) => {
                println!("  args:  {:?}", result.args);
                for (name, value) in &result.flags {
                    println!("  flag:  {} = {:?}", name, value);
                }
            }
            Err(err) => println!("  error: [{}] {}", err.kind(), err),
        }
        println!();
    }
}
