/*!
# Introductory Tutorial for Pine

Pine programs are plain text files with one instruction per line. Save
the following as `hello.pine` and run it with `pine -f hello.pine`.

```text
mov greeting 'Hello World'
prt greeting
```

<pre><code>&nbsp;  Hello World
</code></pre>

Every instruction is a three letter mnemonic followed by its operands,
separated by whitespace. `mov` creates a binding named `greeting` and
`prt` prints its value followed by a newline.

The kind of a value comes from how its literal is written. Quotes make
text, a trailing `f` makes a real number and plain digits make an
integer.

```text
mov name "pine"
mov ratio 2.5f
mov count 42
```

Arithmetic works on bindings, never on literals, and writes its result
into the first operand.

```text
mov x 5
mov y 3
add x y
prt x
```

<pre><code>&nbsp;  8
</code></pre>

Reals print rounded to one decimal place.

```text
mov x 2.0f
mov y 2.0f
add x y
prt x
```

<pre><code>&nbsp;  4.0
</code></pre>

Adding values of different kinds joins them as text, so `add` doubles
as string concatenation. The other operators refuse mixed kinds with a
`TYPE MISMATCH` error.

Lines that are blank or start with `#` are ignored.

```text
# count down from three
mov n 3
```

When something goes wrong the program stops and the error names the
line it happened on.

<pre><code>&nbsp;  EMPTY STACK IN 1; THE STACK IS EMPTY
&nbsp;    [1]: pop x
</code></pre>

Stop a running program with CTRL-C.

*/
