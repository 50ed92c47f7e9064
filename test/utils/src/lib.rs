pub fn completion_fixture() -> &'static str {
    return r#"
Here's a Python function that reverses a string:

```python
def reverse(text):
    return text[::-1]

print(reverse("hello"))
```

# Explanation

Slicing with a step of -1 walks the string backwards, so the result is the reversed string.
"#
    .trim();
}

pub fn completion_fixture_with_colon() -> &'static str {
    return r#"
```go
package main

import "fmt"

func main() {
    for i := 0; i <= 10; i++ {
        fmt.Println(i)
    }
}
```

Explanation: The loop runs from 0 to 10 inclusive and prints each number.
"#
    .trim();
}

pub fn users_fixture() -> &'static str {
    return r#"alice:pw1
bob:hunter2
malformed line
carol:pa:ss
"#;
}
