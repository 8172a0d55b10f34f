/*!
# Instruction Reference

Operands called `name` refer to bindings. A name is made of ASCII
letters, digits and `_` and must not read as a number.

## Bindings

`mov name literal` assigns a literal. Everything after the name is the
literal, so quoted text may contain spaces.

`clr name` removes a binding. Removing one that does not exist is an
`UNDEFINED BINDING` error, as is reading one.

## Arithmetic

`add` `sub` `mlt` `div` `mod` each take two names and store the result in
the first. Integers are 64-bit and overflow is an error. Dividing an
integer by zero is a `DIVISION BY ZERO` error. Reals follow IEEE 754 and
`mod` on reals is the IEEE remainder.

```text
mov a 7
mov b 2
mod a b
prt a
```

<pre><code>&nbsp;  1
</code></pre>

## Comparison

`cmp a b` remembers whether `a` is less than, equal to or greater than
`b`. Numbers of the same kind compare numerically, everything else
compares as text. The conditional jumps read this result.

## Value stack

`psh name` pushes a copy of the binding, name and all. `pop name` pops
the top entry into an existing binding.

```text
mov x 1
psh x
mov x 2
pop x
prt x
```

<pre><code>&nbsp;  1
</code></pre>

## Input and output

| instruction | effect |
|---|---|
| `prt name` | print the value and a newline |
| `ask name` | prompt with `> ` and store the line typed as text |
| `ifl name path` | read the file named by `path` into `name` |
| `ofl name path` | write `name` to the file named by `path` |
| `sys name command` | run the text in `command` through the shell |

`sys` stores standard output in `name` and compares the exit status to
zero, so `jeq` after `sys` jumps when the command succeeded.

`ask`, `ifl` and `sys` write into a binding that must already exist.

## Process

`slp name` sleeps for the integer number of milliseconds in `name`.
`ext name` stops the program with the integer in `name` as exit code.

## Debugging

`dbg category on` and `dbg category off` switch trace output.

| category | traces |
|---|---|
| `all` | everything below |
| `cmt` | comment lines |
| `map` | the bindings after each instruction |
| `stk` | the value stack after each instruction |
| `lbl` | the known labels after each instruction |
| `flg` | the comparison result and jump state |
| `jmp` | how jumps are resolved |
| `ins` | each instruction as it is dispatched (also `rgx`) |
| `lne` | every line read |

*/
